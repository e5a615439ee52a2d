//! Core domain types for a listing feed snapshot.
//!
//! The content API hands back loosely-typed custom fields: a price can be a
//! number, a numeric string, an empty string or missing entirely, and an
//! amenity flag can be `true`, `"1"`, `1` or missing. These types keep the
//! raw shape intact and push every interpretation through the explicit
//! coercions in [`crate::coerce`].

use crate::coerce::{to_bool_or_false, to_number_or_zero};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a listing (the content API post id)
pub type ListingId = u64;

/// Unique identifier for a category term
pub type TermId = u64;

// =============================================================================
// Attribute values
// =============================================================================

/// One raw custom-field value as it arrived from the content API.
///
/// `null` never reaches this type: a `null` field deserializes to `None`
/// on the surrounding `Option`, the same as an absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Arrays, objects and anything else the editor put in the field
    Other(serde_json::Value),
}

impl AttributeValue {
    /// Borrow the value as text, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value as f64)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

/// Numeric attributes the filter engine compares against bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericAttribute {
    Price,
    Bedrooms,
    Bathrooms,
    AreaSquareMeters,
    ConstructionYear,
}

impl NumericAttribute {
    pub const ALL: [NumericAttribute; 5] = [
        NumericAttribute::Price,
        NumericAttribute::Bedrooms,
        NumericAttribute::Bathrooms,
        NumericAttribute::AreaSquareMeters,
        NumericAttribute::ConstructionYear,
    ];

    /// Field name as it appears in the content API
    pub fn field_name(self) -> &'static str {
        match self {
            NumericAttribute::Price => "price",
            NumericAttribute::Bedrooms => "bedrooms",
            NumericAttribute::Bathrooms => "bathrooms",
            NumericAttribute::AreaSquareMeters => "square_footage",
            NumericAttribute::ConstructionYear => "construction_year",
        }
    }
}

impl fmt::Display for NumericAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Boolean amenity flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amenity {
    Garden,
    Pool,
    Garage,
    Driveway,
}

impl Amenity {
    pub const ALL: [Amenity; 4] = [
        Amenity::Garden,
        Amenity::Pool,
        Amenity::Garage,
        Amenity::Driveway,
    ];

    /// Short human label, used by the presentation layer
    pub fn label(self) -> &'static str {
        match self {
            Amenity::Garden => "garden",
            Amenity::Pool => "pool",
            Amenity::Garage => "garage",
            Amenity::Driveway => "driveway",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Listing attributes
// =============================================================================

/// Custom-field data attached to a listing.
///
/// Field names follow the content API. Older feeds spell the amenity flags
/// without the `has_` prefix, and a feed mid-migration can carry both
/// spellings on one listing. Both are kept; the `has_*` value wins when
/// present. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingAttributes {
    #[serde(default)]
    pub price: Option<AttributeValue>,
    #[serde(default)]
    pub bedrooms: Option<AttributeValue>,
    #[serde(default)]
    pub bathrooms: Option<AttributeValue>,
    #[serde(default)]
    pub square_footage: Option<AttributeValue>,
    #[serde(default)]
    pub construction_year: Option<AttributeValue>,

    #[serde(default)]
    pub has_garden: Option<AttributeValue>,
    #[serde(default)]
    pub has_pool: Option<AttributeValue>,
    #[serde(default)]
    pub has_garage: Option<AttributeValue>,
    #[serde(default)]
    pub has_driveway: Option<AttributeValue>,

    // Legacy spellings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garden: Option<AttributeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<AttributeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garage: Option<AttributeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driveway: Option<AttributeValue>,

    /// Flat property type slug, an alternative to taxonomy membership
    #[serde(default, rename = "type")]
    pub property_type: Option<AttributeValue>,

    #[serde(default)]
    pub description: Option<AttributeValue>,
    #[serde(default)]
    pub property_gallery: Option<AttributeValue>,
}

/// Shared all-unset attributes, used when a record without custom fields
/// is allowed through with defaults.
pub static EMPTY_ATTRIBUTES: ListingAttributes = ListingAttributes {
    price: None,
    bedrooms: None,
    bathrooms: None,
    square_footage: None,
    construction_year: None,
    has_garden: None,
    has_pool: None,
    has_garage: None,
    has_driveway: None,
    garden: None,
    pool: None,
    garage: None,
    driveway: None,
    property_type: None,
    description: None,
    property_gallery: None,
};

impl ListingAttributes {
    /// Raw value of a numeric attribute
    pub fn raw_number(&self, attribute: NumericAttribute) -> Option<&AttributeValue> {
        match attribute {
            NumericAttribute::Price => self.price.as_ref(),
            NumericAttribute::Bedrooms => self.bedrooms.as_ref(),
            NumericAttribute::Bathrooms => self.bathrooms.as_ref(),
            NumericAttribute::AreaSquareMeters => self.square_footage.as_ref(),
            NumericAttribute::ConstructionYear => self.construction_year.as_ref(),
        }
    }

    /// Raw value of an amenity flag, falling back to the legacy spelling
    pub fn raw_flag(&self, amenity: Amenity) -> Option<&AttributeValue> {
        match amenity {
            Amenity::Garden => self.has_garden.as_ref().or(self.garden.as_ref()),
            Amenity::Pool => self.has_pool.as_ref().or(self.pool.as_ref()),
            Amenity::Garage => self.has_garage.as_ref().or(self.garage.as_ref()),
            Amenity::Driveway => self.has_driveway.as_ref().or(self.driveway.as_ref()),
        }
    }

    /// Numeric attribute coerced with [`to_number_or_zero`]
    pub fn number(&self, attribute: NumericAttribute) -> f64 {
        to_number_or_zero(self.raw_number(attribute))
    }

    /// Amenity flag coerced with [`to_bool_or_false`]
    pub fn flag(&self, amenity: Amenity) -> bool {
        to_bool_or_false(self.raw_flag(amenity))
    }

    /// Flat `type` attribute, when it holds non-empty text
    pub fn property_type_slug(&self) -> Option<&str> {
        self.property_type
            .as_ref()
            .and_then(AttributeValue::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_ref()
            .and_then(AttributeValue::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Gallery image URLs. Entries that are not plain strings are skipped.
    pub fn gallery_urls(&self) -> Vec<&str> {
        match &self.property_gallery {
            Some(AttributeValue::Other(serde_json::Value::Array(items))) => {
                items.iter().filter_map(|v| v.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// Listings and categories
// =============================================================================

/// One property listing, an immutable snapshot from the content source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: ListingId,
    pub display_title: String,
    /// `None` when the content API sent no custom-field data at all
    pub attributes: Option<ListingAttributes>,
    /// Slugs of every taxonomy term the listing belongs to
    pub category_memberships: BTreeSet<String>,
    pub featured_image: Option<String>,
}

impl ListingRecord {
    /// Create a listing with no attributes and no categories
    pub fn new(id: ListingId, display_title: impl Into<String>) -> Self {
        Self {
            id,
            display_title: display_title.into(),
            attributes: None,
            category_memberships: BTreeSet::new(),
            featured_image: None,
        }
    }

    /// Builder: attach attribute data
    pub fn with_attributes(mut self, attributes: ListingAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Builder: add a category membership
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category_memberships.insert(slug.into());
        self
    }

    /// Attribute data, or the shared all-unset attributes when missing
    pub fn attributes_or_empty(&self) -> &ListingAttributes {
        self.attributes.as_ref().unwrap_or(&EMPTY_ATTRIBUTES)
    }

    pub fn has_attributes(&self) -> bool {
        self.attributes.is_some()
    }
}

/// A taxonomy term (property type); the slug is the stable matching key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTerm {
    pub id: TermId,
    pub display_name: String,
    pub slug: String,
}
