//! # Listing Feed Crate
//!
//! This crate models and loads the listing source consumed by the filter
//! engine: property listings and property type terms, as served by a
//! headless WordPress content API.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (ListingRecord, ListingAttributes, CategoryTerm)
//! - **coerce**: Tolerant number/boolean coercion of raw attribute values
//! - **parser**: Parse REST response bodies into domain types
//! - **catalog**: One session's snapshot with id/slug lookups
//! - **error**: Error types for feed loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use listing_feed::{ListingCatalog, NumericAttribute};
//! use std::path::Path;
//!
//! let catalog = ListingCatalog::load_from_files(Path::new("data/sample"))?;
//!
//! for listing in catalog.listings() {
//!     let price = listing.attributes_or_empty().number(NumericAttribute::Price);
//!     println!("{} {}", listing.display_title, price);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod coerce;
pub mod parser;
pub mod catalog;

// Re-export commonly used types for convenience
pub use error::{ListingLoadError, Result};
pub use coerce::{to_bool_or_false, to_number_or_zero};
pub use parser::{parse_categories, parse_categories_value, parse_listings, parse_listings_value};
pub use catalog::ListingCatalog;
pub use types::{
    // Type aliases
    ListingId,
    TermId,
    // Core types
    AttributeValue,
    ListingAttributes,
    ListingRecord,
    CategoryTerm,
    // Attribute names
    NumericAttribute,
    Amenity,
};
