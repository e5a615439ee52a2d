//! Parser for content API responses.
//!
//! Handles the two WordPress REST endpoints the listing views read:
//! - `/wp/v2/property?_embed`: listing posts with `acf` custom fields and
//!   embedded taxonomy terms and featured media
//! - `/wp/v2/property_type`: the property type taxonomy terms
//!
//! The parser is tolerant of shape problems. A body that is not an array
//! becomes an empty list, and a single element that cannot be read is
//! skipped. Only text that is not JSON at all is an error.

use crate::error::{ListingLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeSet;

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct WireListing {
    id: ListingId,
    #[serde(default)]
    title: Option<WireTitle>,
    #[serde(default)]
    acf: Value,
    #[serde(default, rename = "_embedded")]
    embedded: WireEmbedded,
}

#[derive(Debug, Default, Deserialize)]
struct WireTitle {
    #[serde(default)]
    rendered: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireEmbedded {
    #[serde(default, rename = "wp:term")]
    terms: Vec<Vec<WireTerm>>,
    #[serde(default, rename = "wp:featuredmedia")]
    featured_media: Vec<WireMedia>,
}

#[derive(Debug, Deserialize)]
struct WireTerm {
    #[serde(default)]
    id: TermId,
    #[serde(default)]
    name: String,
    slug: String,
}

#[derive(Debug, Deserialize)]
struct WireMedia {
    #[serde(default)]
    source_url: Option<String>,
}

impl From<WireTerm> for CategoryTerm {
    fn from(term: WireTerm) -> Self {
        CategoryTerm {
            id: term.id,
            display_name: term.name,
            slug: term.slug,
        }
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// Interpret the `acf` field.
///
/// WordPress sends an object when the post has custom fields. A post
/// without any sends `false`, `null`, an empty array, or omits the field;
/// all of those mean "no attribute data".
fn parse_attributes(acf: Value, id: ListingId) -> Option<ListingAttributes> {
    match acf {
        Value::Object(_) => match serde_json::from_value(acf) {
            Ok(attributes) => Some(attributes),
            Err(e) => {
                tracing::warn!(listing_id = id, error = %e, "Unreadable custom fields, treating as missing");
                None
            }
        },
        _ => None,
    }
}

fn into_record(wire: WireListing) -> ListingRecord {
    let attributes = parse_attributes(wire.acf, wire.id);

    // The first term group is the property type taxonomy; later groups
    // (tags and the like) are not categories.
    let category_memberships: BTreeSet<String> = wire
        .embedded
        .terms
        .into_iter()
        .next()
        .unwrap_or_default()
        .into_iter()
        .map(|term| term.slug)
        .filter(|slug| !slug.is_empty())
        .collect();

    let featured_image = wire
        .embedded
        .featured_media
        .into_iter()
        .next()
        .and_then(|media| media.source_url);

    ListingRecord {
        id: wire.id,
        display_title: wire.title.and_then(|t| t.rendered).unwrap_or_default(),
        attributes,
        category_memberships,
        featured_image,
    }
}

/// Deserialize each array element independently, skipping bad ones.
fn parse_elements<T: DeserializeOwned>(body: Value, source_name: &str) -> Vec<T> {
    let items = match body {
        Value::Array(items) => items,
        other => {
            tracing::warn!(
                source = source_name,
                kind = value_kind(&other),
                "Feed body is not an array, treating as empty"
            );
            return Vec::new();
        }
    };

    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<T>(item) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(source = source_name, index = idx, error = %e, "Skipping malformed element");
                None
            }
        })
        .collect();

    if parsed.len() < total {
        tracing::debug!(
            source = source_name,
            kept = parsed.len(),
            total,
            "Some feed elements were skipped"
        );
    }
    parsed
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_json(text: &str, source_name: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| ListingLoadError::InvalidJson {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Public entry points
// =============================================================================

/// Parse an already-decoded listings response body.
pub fn parse_listings_value(body: Value) -> Vec<ListingRecord> {
    parse_elements::<WireListing>(body, "listings")
        .into_iter()
        .map(into_record)
        .collect()
}

/// Parse a listings response body from JSON text.
pub fn parse_listings(text: &str) -> Result<Vec<ListingRecord>> {
    Ok(parse_listings_value(parse_json(text, "listings")?))
}

/// Parse an already-decoded category terms response body.
pub fn parse_categories_value(body: Value) -> Vec<CategoryTerm> {
    parse_elements::<WireTerm>(body, "categories")
        .into_iter()
        .map(CategoryTerm::from)
        .collect()
}

/// Parse a category terms response body from JSON text.
pub fn parse_categories(text: &str) -> Result<Vec<CategoryTerm>> {
    Ok(parse_categories_value(parse_json(text, "categories")?))
}
