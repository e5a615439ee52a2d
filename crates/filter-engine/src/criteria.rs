//! Filter criteria owned by the presentation layer.
//!
//! Every field is optional and `None` means "unset". An unset criterion
//! never excludes a listing. Criteria serialize to camelCase JSON so a
//! front-end can send or store them as-is.

use listing_feed::{Amenity, NumericAttribute};
use serde::{Deserialize, Serialize};

/// Requirement on a boolean amenity flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmenityRequirement {
    /// The flag must coerce to true
    #[serde(rename = "yes", alias = "required-true")]
    MustHave,
    /// The flag must coerce to false
    #[serde(rename = "no", alias = "required-false")]
    MustNotHave,
}

impl AmenityRequirement {
    /// Whether a coerced flag value satisfies this requirement
    pub fn accepts(self, flag: bool) -> bool {
        match self {
            AmenityRequirement::MustHave => flag,
            AmenityRequirement::MustNotHave => !flag,
        }
    }
}

/// The current set of user-selected constraints.
///
/// Created all-unset, mutated field by field as controls change, and reset
/// on demand. Criteria are conjunctive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_text: Option<String>,

    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<f64>,
    pub min_bathrooms: Option<f64>,
    pub min_area_square_meters: Option<f64>,
    pub min_construction_year: Option<f64>,

    pub selected_category_slug: Option<String>,

    pub garden_requirement: Option<AmenityRequirement>,
    pub pool_requirement: Option<AmenityRequirement>,
    pub garage_requirement: Option<AmenityRequirement>,
    pub driveway_requirement: Option<AmenityRequirement>,
}

impl FilterCriteria {
    /// Create criteria with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no criterion would exclude anything
    pub fn is_unset(&self) -> bool {
        self.effective_search().is_none()
            && NumericAttribute::ALL
                .iter()
                .all(|&a| self.minimum_for(a).is_none() && self.maximum_for(a).is_none())
            && self.effective_category().is_none()
            && Amenity::ALL.iter().all(|&a| self.requirement_for(a).is_none())
    }

    /// Search text, or `None` when it is empty or whitespace-only
    pub fn effective_search(&self) -> Option<&str> {
        self.search_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Selected category slug, or `None` when it is empty
    pub fn effective_category(&self) -> Option<&str> {
        self.selected_category_slug
            .as_deref()
            .filter(|slug| !slug.is_empty())
    }

    /// Lower bound for a numeric attribute
    pub fn minimum_for(&self, attribute: NumericAttribute) -> Option<f64> {
        match attribute {
            NumericAttribute::Price => self.min_price,
            NumericAttribute::Bedrooms => self.min_bedrooms,
            NumericAttribute::Bathrooms => self.min_bathrooms,
            NumericAttribute::AreaSquareMeters => self.min_area_square_meters,
            NumericAttribute::ConstructionYear => self.min_construction_year,
        }
    }

    /// Upper bound for a numeric attribute. Only price has one.
    pub fn maximum_for(&self, attribute: NumericAttribute) -> Option<f64> {
        match attribute {
            NumericAttribute::Price => self.max_price,
            _ => None,
        }
    }

    pub fn requirement_for(&self, amenity: Amenity) -> Option<AmenityRequirement> {
        match amenity {
            Amenity::Garden => self.garden_requirement,
            Amenity::Pool => self.pool_requirement,
            Amenity::Garage => self.garage_requirement,
            Amenity::Driveway => self.driveway_requirement,
        }
    }

    pub fn set_requirement(&mut self, amenity: Amenity, requirement: Option<AmenityRequirement>) {
        let slot = match amenity {
            Amenity::Garden => &mut self.garden_requirement,
            Amenity::Pool => &mut self.pool_requirement,
            Amenity::Garage => &mut self.garage_requirement,
            Amenity::Driveway => &mut self.driveway_requirement,
        };
        *slot = requirement;
    }

    /// Select a category, or clear the selection if it is already active.
    pub fn toggle_category(&mut self, slug: Option<&str>) {
        self.selected_category_slug = match slug {
            Some(slug) if self.selected_category_slug.as_deref() != Some(slug) => {
                Some(slug.to_string())
            }
            _ => None,
        };
    }

    /// Overlay every field that is set in `other` onto `self`.
    pub fn merge(&mut self, other: FilterCriteria) {
        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        overlay!(
            search_text,
            min_price,
            max_price,
            min_bedrooms,
            min_bathrooms,
            min_area_square_meters,
            min_construction_year,
            selected_category_slug,
            garden_requirement,
            pool_requirement,
            garage_requirement,
            driveway_requirement,
        );
    }

    // Builder helpers, mostly for tests and programmatic callers

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn with_min_price(mut self, value: f64) -> Self {
        self.min_price = Some(value);
        self
    }

    pub fn with_max_price(mut self, value: f64) -> Self {
        self.max_price = Some(value);
        self
    }

    pub fn with_min_bedrooms(mut self, value: f64) -> Self {
        self.min_bedrooms = Some(value);
        self
    }

    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.selected_category_slug = Some(slug.into());
        self
    }

    pub fn with_requirement(mut self, amenity: Amenity, requirement: AmenityRequirement) -> Self {
        self.set_requirement(amenity, Some(requirement));
        self
    }
}
