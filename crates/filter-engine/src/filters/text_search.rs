//! Free-text search over listing titles.

use crate::criteria::FilterCriteria;
use crate::traits::ListingFilter;
use listing_feed::{ListingAttributes, ListingRecord};

/// Keeps listings whose title contains the search text, ignoring case.
///
/// Empty or whitespace-only search text leaves the filter inactive.
pub struct TextSearchFilter;

impl ListingFilter for TextSearchFilter {
    fn name(&self) -> &str {
        "TextSearchFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        criteria.effective_search().is_some()
    }

    fn matches(
        &self,
        listing: &ListingRecord,
        _attributes: &ListingAttributes,
        criteria: &FilterCriteria,
    ) -> bool {
        match criteria.effective_search() {
            Some(needle) => listing
                .display_title
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }

    fn apply(&self, mut listings: Vec<ListingRecord>, criteria: &FilterCriteria) -> Vec<ListingRecord> {
        // Lower-case the needle once rather than per listing
        let Some(needle) = criteria.effective_search().map(str::to_lowercase) else {
            return listings;
        };
        listings.retain(|listing| listing.display_title.to_lowercase().contains(&needle));
        listings
    }
}
