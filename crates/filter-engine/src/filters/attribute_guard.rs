//! Filter to drop listings that arrived without any custom-field data.
//!
//! Such a listing has no price, rooms or amenities to show, so the card
//! view cannot render it. This is the first filter in the strict pipeline.

use crate::criteria::FilterCriteria;
use crate::traits::ListingFilter;
use listing_feed::{ListingAttributes, ListingRecord};

/// Removes listings whose attribute data is missing entirely.
///
/// Always active, regardless of criteria. A listing with an empty but
/// present attribute object passes.
pub struct AttributeGuardFilter;

impl ListingFilter for AttributeGuardFilter {
    fn name(&self) -> &str {
        "AttributeGuardFilter"
    }

    fn is_active(&self, _criteria: &FilterCriteria) -> bool {
        true
    }

    fn matches(
        &self,
        listing: &ListingRecord,
        _attributes: &ListingAttributes,
        _criteria: &FilterCriteria,
    ) -> bool {
        listing.has_attributes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_guard_filter() {
        let listings = vec![
            ListingRecord::new(1, "Complete").with_attributes(ListingAttributes::default()),
            ListingRecord::new(2, "Bare"),
            ListingRecord::new(3, "Also complete").with_attributes(ListingAttributes::default()),
        ];

        let filtered = AttributeGuardFilter.apply(listings, &FilterCriteria::new());

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 3);
    }
}
