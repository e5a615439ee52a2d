//! Filter to keep only listings of the selected property type.

use crate::criteria::FilterCriteria;
use crate::traits::ListingFilter;
use listing_feed::{ListingAttributes, ListingRecord};

/// Keeps listings that belong to the selected category.
///
/// ## Algorithm
/// A listing matches when either path matches:
/// 1. Its taxonomy memberships contain the slug
/// 2. Its flat `type` attribute equals the slug
///
/// A listing with neither memberships nor a `type` attribute never matches.
pub struct CategoryFilter;

impl ListingFilter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        criteria.effective_category().is_some()
    }

    fn matches(
        &self,
        listing: &ListingRecord,
        attributes: &ListingAttributes,
        criteria: &FilterCriteria,
    ) -> bool {
        let Some(slug) = criteria.effective_category() else {
            return true;
        };
        let term_match = listing.category_memberships.contains(slug);
        let type_match = attributes.property_type_slug() == Some(slug);
        term_match || type_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(id: u64, slug: &str) -> ListingRecord {
        let attributes = ListingAttributes {
            property_type: Some(slug.into()),
            ..ListingAttributes::default()
        };
        ListingRecord::new(id, "Typed").with_attributes(attributes)
    }

    #[test]
    fn test_taxonomy_membership() {
        let listings = vec![
            ListingRecord::new(1, "Villa")
                .with_category("villa")
                .with_category("coastal"),
            ListingRecord::new(2, "Uncategorised"),
        ];

        let criteria = FilterCriteria::new().with_category("villa");
        let filtered = CategoryFilter.apply(listings, &criteria);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_flat_type_attribute() {
        let listings = vec![typed(1, "villa"), typed(2, "studio")];

        let criteria = FilterCriteria::new().with_category("villa");
        let filtered = CategoryFilter.apply(listings, &criteria);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_either_path_suffices_when_both_present() {
        let listings = vec![
            // term says villa, type says studio
            typed(1, "studio").with_category("villa"),
            // term says house, type says villa
            typed(2, "villa").with_category("house"),
            // neither says villa
            typed(3, "studio").with_category("house"),
        ];

        let criteria = FilterCriteria::new().with_category("villa");
        let ids: Vec<_> = CategoryFilter
            .apply(listings, &criteria)
            .iter()
            .map(|l| l.id)
            .collect();

        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_empty_slug_is_inactive() {
        let criteria = FilterCriteria::new().with_category("");
        assert!(!CategoryFilter.is_active(&criteria));
    }
}
