//! FilterEngine: the entry point the presentation layer calls.
//!
//! The engine is a pure function over a snapshot: same listings and same
//! criteria give the same output, in input order. It holds no state
//! besides its pipeline and is re-run in full on every criteria change.

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::*;
use listing_feed::{Amenity, ListingRecord, NumericAttribute};
use serde::{Deserialize, Serialize};

/// What to do with a listing that arrived without any attribute data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingAttributesPolicy {
    /// Drop it before any criterion is checked
    #[default]
    Exclude,
    /// Treat every attribute as unset (zero / false) and filter normally
    DefaultAndInclude,
}

/// Filters listings against criteria.
pub struct FilterEngine {
    pipeline: FilterPipeline,
    policy: MissingAttributesPolicy,
}

impl FilterEngine {
    /// Build the standard pipeline for a missing-data policy.
    ///
    /// Cheap filters run first so later ones see fewer listings.
    pub fn new(policy: MissingAttributesPolicy) -> Self {
        let mut pipeline = FilterPipeline::new();
        if policy == MissingAttributesPolicy::Exclude {
            pipeline = pipeline.add_filter(AttributeGuardFilter);
        }
        for attribute in NumericAttribute::ALL {
            pipeline = pipeline.add_filter(MinimumBoundFilter::new(attribute));
        }
        pipeline = pipeline
            .add_filter(MaximumBoundFilter::new(NumericAttribute::Price))
            .add_filter(CategoryFilter);
        for amenity in Amenity::ALL {
            pipeline = pipeline.add_filter(AmenityFilter::new(amenity));
        }
        pipeline = pipeline.add_filter(TextSearchFilter);

        Self { pipeline, policy }
    }

    pub fn policy(&self) -> MissingAttributesPolicy {
        self.policy
    }

    pub fn pipeline(&self) -> &FilterPipeline {
        &self.pipeline
    }

    /// Filter a borrowed snapshot, cloning the survivors.
    pub fn filter(&self, listings: &[ListingRecord], criteria: &FilterCriteria) -> Vec<ListingRecord> {
        self.apply(listings.to_vec(), criteria)
    }

    /// Filter an owned snapshot.
    pub fn apply(&self, listings: Vec<ListingRecord>, criteria: &FilterCriteria) -> Vec<ListingRecord> {
        let input_count = listings.len();
        let filtered = self.pipeline.apply(listings, criteria);
        tracing::debug!(
            input_count,
            output_count = filtered.len(),
            policy = ?self.policy,
            "Listings filtered"
        );
        filtered
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(MissingAttributesPolicy::default())
    }
}

/// Filter listings with the default engine (listings without attribute
/// data are excluded).
pub fn filter_listings(listings: &[ListingRecord], criteria: &FilterCriteria) -> Vec<ListingRecord> {
    FilterEngine::default().filter(listings, criteria)
}
