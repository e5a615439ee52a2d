//! Filter implementations for the listing engine.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod attribute_guard;
pub mod text_search;
pub mod numeric_bound;
pub mod category;
pub mod amenity;

// Re-export for convenience
pub use attribute_guard::AttributeGuardFilter;
pub use text_search::TextSearchFilter;
pub use numeric_bound::{MaximumBoundFilter, MinimumBoundFilter};
pub use category::CategoryFilter;
pub use amenity::AmenityFilter;
