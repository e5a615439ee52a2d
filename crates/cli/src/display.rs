//! Display mapping for listings: price formatting, cards and detail views.

use colored::Colorize;
use listing_feed::{Amenity, ListingAttributes, ListingCatalog, ListingRecord, NumericAttribute};

/// Format a price with Dutch digit grouping, e.g. `€ 250.000`.
///
/// Unset or zero prices render as `€ --`. Fractions are rounded here and
/// nowhere earlier.
pub fn format_price(attributes: &ListingAttributes) -> String {
    let price = attributes.number(NumericAttribute::Price);
    if price <= 0.0 {
        return "€ --".to_string();
    }
    format!("€ {}", group_thousands(price.round() as u64))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Area in square meters, or `--` when unset
pub fn format_area(attributes: &ListingAttributes) -> String {
    let area = attributes.number(NumericAttribute::AreaSquareMeters);
    if area <= 0.0 {
        "--".to_string()
    } else {
        format!("{} m²", area.round() as u64)
    }
}

fn count(attributes: &ListingAttributes, attribute: NumericAttribute) -> u64 {
    attributes.number(attribute).max(0.0).round() as u64
}

/// Amenities the listing has, comma separated
pub fn format_amenities(attributes: &ListingAttributes) -> String {
    let present: Vec<&str> = Amenity::ALL
        .iter()
        .filter(|&&a| attributes.flag(a))
        .map(|a| a.label())
        .collect();
    if present.is_empty() {
        "none".to_string()
    } else {
        present.join(", ")
    }
}

/// One-line summary plus a stats line, as on an overview card
pub fn format_card(listing: &ListingRecord) -> String {
    let attributes = listing.attributes_or_empty();
    format!(
        "{} {}\n   {}  |  {} bed  {} bath  {}",
        format!("#{}", listing.id).dimmed(),
        listing.display_title.bold(),
        format_price(attributes).green(),
        count(attributes, NumericAttribute::Bedrooms),
        count(attributes, NumericAttribute::Bathrooms),
        format_area(attributes),
    )
}

/// Multi-line detail view
pub fn format_detail(listing: &ListingRecord, catalog: &ListingCatalog) -> String {
    let attributes = listing.attributes_or_empty();
    let mut lines = vec![
        listing.display_title.bold().blue().to_string(),
        format!("{}Price: {}", "• ".green(), format_price(attributes)),
        format!(
            "{}Bedrooms: {}  Bathrooms: {}",
            "• ".green(),
            count(attributes, NumericAttribute::Bedrooms),
            count(attributes, NumericAttribute::Bathrooms)
        ),
        format!("{}Area: {}", "• ".green(), format_area(attributes)),
    ];

    let year = count(attributes, NumericAttribute::ConstructionYear);
    if year > 0 {
        lines.push(format!("{}Built: {}", "• ".green(), year));
    }
    lines.push(format!("{}Amenities: {}", "• ".cyan(), format_amenities(attributes)));

    let mut categories: Vec<String> = listing
        .category_memberships
        .iter()
        .map(|slug| display_category(catalog, slug))
        .collect();
    if let Some(slug) = attributes.property_type_slug() {
        if !listing.category_memberships.contains(slug) {
            categories.push(display_category(catalog, slug));
        }
    }
    if !categories.is_empty() {
        lines.push(format!("{}Type: {}", "• ".cyan(), categories.join(", ")));
    }

    if let Some(image) = &listing.featured_image {
        lines.push(format!("{}Image: {}", "• ".cyan(), image));
    }
    let gallery = attributes.gallery_urls();
    if !gallery.is_empty() {
        lines.push(format!("{}Gallery: {} photos", "• ".cyan(), gallery.len()));
    }
    if let Some(description) = attributes.description_text() {
        lines.push(String::new());
        lines.push(description.trim().to_string());
    }
    if !listing.has_attributes() {
        lines.push("(no custom field data for this listing)".dimmed().to_string());
    }
    lines.join("\n")
}

fn display_category(catalog: &ListingCatalog, slug: &str) -> String {
    catalog
        .category_by_slug(slug)
        .map(|term| term.display_name.clone())
        .unwrap_or_else(|| slug.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing_feed::AttributeValue;

    fn priced(price: Option<AttributeValue>) -> ListingAttributes {
        ListingAttributes {
            price,
            ..ListingAttributes::default()
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(&priced(Some("250000".into()))), "€ 250.000");
        assert_eq!(format_price(&priced(Some(AttributeValue::Number(1234567.6)))), "€ 1.234.568");
        assert_eq!(format_price(&priced(Some(AttributeValue::Number(950.0)))), "€ 950");
        assert_eq!(format_price(&priced(None)), "€ --");
        assert_eq!(format_price(&priced(Some("".into()))), "€ --");
    }

    #[test]
    fn test_format_area() {
        let attributes = ListingAttributes {
            square_footage: Some("75.5".into()),
            ..ListingAttributes::default()
        };
        assert_eq!(format_area(&attributes), "76 m²");
        assert_eq!(format_area(&ListingAttributes::default()), "--");
    }

    #[test]
    fn test_format_amenities() {
        let attributes = ListingAttributes {
            has_garden: Some("1".into()),
            has_driveway: Some(true.into()),
            has_pool: Some("0".into()),
            ..ListingAttributes::default()
        };
        assert_eq!(format_amenities(&attributes), "garden, driveway");
        assert_eq!(format_amenities(&ListingAttributes::default()), "none");
    }
}
