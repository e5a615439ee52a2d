//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains
//! listing filters together using the builder pattern.

use crate::criteria::FilterCriteria;
use crate::traits::ListingFilter;
use listing_feed::ListingRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AttributeGuardFilter)
///     .add_filter(TextSearchFilter)
///     .add_filter(MinimumBoundFilter::new(NumericAttribute::Price));
///
/// let filtered = pipeline.apply(listings, &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn ListingFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl ListingFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// ## Algorithm
    /// 1. Start with the input listings
    /// 2. For each filter in order, skipping inactive ones:
    ///    a. Apply the filter
    ///    b. Log filter name with input and output counts
    /// 3. Return final filtered set
    ///
    /// Every filter keeps input order, so the result does too.
    pub fn apply(
        &self,
        listings: Vec<ListingRecord>,
        criteria: &FilterCriteria,
    ) -> Vec<ListingRecord> {
        let mut current = listings;
        for filter in &self.filters {
            if !filter.is_active(criteria) {
                continue;
            }
            let input_count = current.len();
            current = filter.apply(current, criteria);
            tracing::debug!(
                filter = filter.name(),
                input_count,
                output_count = current.len(),
                "Filter applied"
            );
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
