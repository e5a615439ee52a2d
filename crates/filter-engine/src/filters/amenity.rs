//! Filter on boolean amenity flags (garden, pool, garage, driveway).

use crate::criteria::FilterCriteria;
use crate::traits::ListingFilter;
use listing_feed::{Amenity, ListingAttributes, ListingRecord};

/// Keeps listings whose amenity flag satisfies the requirement.
///
/// The flag is coerced with `to_bool_or_false`, so a missing flag counts
/// as "does not have it".
pub struct AmenityFilter {
    amenity: Amenity,
    name: String,
}

impl AmenityFilter {
    pub fn new(amenity: Amenity) -> Self {
        Self {
            amenity,
            name: format!("AmenityFilter({amenity})"),
        }
    }
}

impl ListingFilter for AmenityFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        criteria.requirement_for(self.amenity).is_some()
    }

    fn matches(
        &self,
        _listing: &ListingRecord,
        attributes: &ListingAttributes,
        criteria: &FilterCriteria,
    ) -> bool {
        match criteria.requirement_for(self.amenity) {
            Some(requirement) => requirement.accepts(attributes.flag(self.amenity)),
            None => true,
        }
    }
}
