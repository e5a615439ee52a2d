//! ListingCatalog: one session's snapshot of the listing source.
//!
//! The catalog owns the listings (in feed order) and the category terms,
//! and offers the lookups the presentation layer needs around the filter
//! engine: find a listing by id, resolve a slug to its display name, and
//! count how many listings carry each category.

use crate::error::{ListingLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// File holding the listings response body
pub const LISTINGS_FILE: &str = "listings.json";

/// File holding the property type terms response body
pub const CATEGORIES_FILE: &str = "property_types.json";

/// Snapshot of listings and category terms, fetched once per view session.
#[derive(Debug, Default)]
pub struct ListingCatalog {
    listings: Vec<ListingRecord>,
    categories: Vec<CategoryTerm>,
    by_id: HashMap<ListingId, usize>,
}

impl ListingCatalog {
    /// Build a catalog from already-parsed data.
    ///
    /// Feed order is kept. If two listings share an id, lookups by id
    /// return the first one.
    pub fn new(listings: Vec<ListingRecord>, categories: Vec<CategoryTerm>) -> Self {
        let mut by_id = HashMap::with_capacity(listings.len());
        for (idx, listing) in listings.iter().enumerate() {
            by_id.entry(listing.id).or_insert(idx);
        }
        Self {
            listings,
            categories,
            by_id,
        }
    }

    /// Load a snapshot from a directory holding `listings.json` and
    /// (optionally) `property_types.json`.
    ///
    /// Both files are read and parsed in parallel.
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        let listings_path = data_dir.join(LISTINGS_FILE);
        let categories_path = data_dir.join(CATEGORIES_FILE);

        if !listings_path.exists() {
            return Err(ListingLoadError::FileNotFound {
                path: listings_path.display().to_string(),
            });
        }

        let (listings, categories) = rayon::join(
            || -> Result<Vec<ListingRecord>> {
                let text = fs::read_to_string(&listings_path)?;
                parser::parse_listings(&text)
            },
            || -> Result<Vec<CategoryTerm>> {
                if !categories_path.exists() {
                    tracing::warn!(
                        path = %categories_path.display(),
                        "No category terms file, continuing without categories"
                    );
                    return Ok(Vec::new());
                }
                let text = fs::read_to_string(&categories_path)?;
                parser::parse_categories(&text)
            },
        );

        let listings = listings?;
        let categories = categories?;

        tracing::info!(
            listings = listings.len(),
            categories = categories.len(),
            dir = %data_dir.display(),
            "Loaded listing feed"
        );

        Ok(Self::new(listings, categories))
    }

    /// All listings in feed order
    pub fn listings(&self) -> &[ListingRecord] {
        &self.listings
    }

    /// All category terms in feed order
    pub fn categories(&self) -> &[CategoryTerm] {
        &self.categories
    }

    pub fn get_listing(&self, id: ListingId) -> Option<&ListingRecord> {
        self.by_id.get(&id).map(|&idx| &self.listings[idx])
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&CategoryTerm> {
        self.categories.iter().find(|term| term.slug == slug)
    }

    /// Number of listings that carry each category slug, either through
    /// taxonomy membership or the flat `type` attribute.
    pub fn category_counts(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for listing in &self.listings {
            for slug in &listing.category_memberships {
                *counts.entry(slug.as_str()).or_insert(0) += 1;
            }
            if let Some(slug) = listing
                .attributes
                .as_ref()
                .and_then(ListingAttributes::property_type_slug)
            {
                if !listing.category_memberships.contains(slug) {
                    *counts.entry(slug).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Get counts for debugging/validation: (listings, categories, listings without attributes)
    pub fn counts(&self) -> (usize, usize, usize) {
        let incomplete = self.listings.iter().filter(|l| !l.has_attributes()).count();
        (self.listings.len(), self.categories.len(), incomplete)
    }

    pub fn into_listings(self) -> Vec<ListingRecord> {
        self.listings
    }
}
