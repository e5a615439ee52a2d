//! Lower and upper bounds on numeric attributes.
//!
//! The listing's value is coerced with `to_number_or_zero`, so a listing
//! without a price fails any positive minimum price but passes any
//! maximum price.

use crate::criteria::FilterCriteria;
use crate::traits::ListingFilter;
use listing_feed::{ListingAttributes, ListingRecord, NumericAttribute};

/// Keeps listings whose attribute is `>=` the criteria's minimum.
pub struct MinimumBoundFilter {
    attribute: NumericAttribute,
    name: String,
}

impl MinimumBoundFilter {
    /// Create a new MinimumBoundFilter.
    ///
    /// # Arguments
    /// * `attribute` - Which attribute to read from the listing and which
    ///   minimum to read from the criteria
    pub fn new(attribute: NumericAttribute) -> Self {
        Self {
            attribute,
            name: format!("MinimumBoundFilter({attribute})"),
        }
    }
}

impl ListingFilter for MinimumBoundFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        criteria.minimum_for(self.attribute).is_some()
    }

    fn matches(
        &self,
        _listing: &ListingRecord,
        attributes: &ListingAttributes,
        criteria: &FilterCriteria,
    ) -> bool {
        match criteria.minimum_for(self.attribute) {
            Some(min) => attributes.number(self.attribute) >= min,
            None => true,
        }
    }
}

/// Keeps listings whose attribute is `<=` the criteria's maximum.
pub struct MaximumBoundFilter {
    attribute: NumericAttribute,
    name: String,
}

impl MaximumBoundFilter {
    pub fn new(attribute: NumericAttribute) -> Self {
        Self {
            attribute,
            name: format!("MaximumBoundFilter({attribute})"),
        }
    }
}

impl ListingFilter for MaximumBoundFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        criteria.maximum_for(self.attribute).is_some()
    }

    fn matches(
        &self,
        _listing: &ListingRecord,
        attributes: &ListingAttributes,
        criteria: &FilterCriteria,
    ) -> bool {
        match criteria.maximum_for(self.attribute) {
            Some(max) => attributes.number(self.attribute) <= max,
            None => true,
        }
    }
}
