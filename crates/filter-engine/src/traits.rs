//! Core traits for the filter engine.
//!
//! This module defines the ListingFilter trait that allows composable
//! predicates to be applied to listing sets.

use crate::criteria::FilterCriteria;
use listing_feed::{ListingAttributes, ListingRecord};

/// Core trait for filtering listings.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters take ownership of the Vec<ListingRecord> and return a filtered Vec
/// - A filter cannot fail; malformed attribute data is coerced, not rejected
pub trait ListingFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether the criteria give this filter anything to check.
    ///
    /// An inactive filter passes every listing.
    fn is_active(&self, criteria: &FilterCriteria) -> bool;

    /// Whether a single listing passes.
    ///
    /// `attributes` is the listing's attribute data, or the all-unset
    /// attributes when the listing has none.
    fn matches(
        &self,
        listing: &ListingRecord,
        attributes: &ListingAttributes,
        criteria: &FilterCriteria,
    ) -> bool;

    /// Apply this filter to a set of listings, keeping input order.
    fn apply(
        &self,
        mut listings: Vec<ListingRecord>,
        criteria: &FilterCriteria,
    ) -> Vec<ListingRecord> {
        if !self.is_active(criteria) {
            return listings;
        }
        listings.retain(|listing| self.matches(listing, listing.attributes_or_empty(), criteria));
        listings
    }
}
