//! Filter engine for property listings.
//!
//! This crate provides:
//! - FilterCriteria, the user's current constraints
//! - ListingFilter trait and one implementation per predicate family
//! - FilterPipeline for composing filters
//! - FilterEngine, the standard pipeline behind a single `filter` call
//!
//! ## Matching rules
//! A listing survives iff it passes every active criterion:
//! 1. Listings without attribute data are dropped (unless the engine is
//!    built with `MissingAttributesPolicy::DefaultAndInclude`)
//! 2. Numeric bounds compare the value coerced with `to_number_or_zero`
//! 3. The category matches a taxonomy membership or the flat `type` field
//! 4. Amenity requirements compare the flag coerced with `to_bool_or_false`
//! 5. Non-blank search text is a case-insensitive title substring
//!
//! ## Example Usage
//! ```ignore
//! use filter_engine::{FilterCriteria, FilterEngine};
//!
//! let engine = FilterEngine::default();
//! let criteria = FilterCriteria::new().with_min_price(210_000.0).with_category("villa");
//! let visible = engine.filter(catalog.listings(), &criteria);
//! ```

pub mod criteria;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod engine;

// Re-export main types
pub use criteria::{AmenityRequirement, FilterCriteria};
pub use traits::ListingFilter;
pub use filter_pipeline::FilterPipeline;
pub use engine::{filter_listings, FilterEngine, MissingAttributesPolicy};
