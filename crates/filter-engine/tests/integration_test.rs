//! Integration tests for the filter engine.
//!
//! These tests run the engine over a feed parsed from a realistic REST
//! response body and check the behavioural properties the presentation
//! layer relies on.

use filter_engine::{
    filter_listings, AmenityRequirement, FilterCriteria, FilterEngine, MissingAttributesPolicy,
};
use listing_feed::{parse_listings_value, Amenity, ListingRecord};
use serde_json::json;

fn create_test_feed() -> Vec<ListingRecord> {
    let body = json!([
        {
            "id": 101,
            "title": { "rendered": "Luxury villa near coast" },
            "acf": {
                "price": "250000", "bedrooms": "3", "bathrooms": 2,
                "square_footage": "180", "construction_year": "2004",
                "has_garden": "1", "has_pool": true, "has_garage": 0, "has_driveway": "0"
            },
            "_embedded": { "wp:term": [[{ "id": 1, "name": "Villa", "slug": "villa" },
                                        { "id": 2, "name": "Coastal", "slug": "coastal" }]] }
        },
        {
            "id": 102,
            "title": { "rendered": "City apartment" },
            "acf": {
                "price": 200000, "bedrooms": 2, "bathrooms": "1",
                "square_footage": 75.5, "construction_year": 2015,
                "has_garden": false, "has_pool": "0", "has_garage": 1
            },
            "_embedded": { "wp:term": [[{ "id": 3, "name": "Apartment", "slug": "apartment" }]] }
        },
        {
            "id": 103,
            "title": { "rendered": "Farm house on request" },
            "acf": { "price": null, "bedrooms": 4, "square_footage": "", "type": "house" }
        },
        {
            "id": 104,
            "title": { "rendered": "Draft listing" },
            "acf": []
        },
        {
            "id": 105,
            "title": { "rendered": "Seaside Villa" },
            "acf": {
                "price": "495000", "bedrooms": 5, "bathrooms": 3,
                "square_footage": "310", "construction_year": "1998",
                "has_garden": 1, "has_pool": "1", "has_garage": true, "has_driveway": true,
                "type": "villa"
            },
            "_embedded": { "wp:term": [[]] }
        },
        {
            "id": 106,
            "title": { "rendered": "Studio with garden" },
            "acf": { "price": "not set", "bedrooms": 1, "has_garden": "1" },
            "_embedded": { "wp:term": [[{ "id": 4, "name": "Studio", "slug": "studio" }]] }
        }
    ]);

    parse_listings_value(body)
}

fn ids(listings: &[ListingRecord]) -> Vec<u64> {
    listings.iter().map(|l| l.id).collect()
}

/// A spread of criteria touching every predicate family
fn criteria_samples() -> Vec<FilterCriteria> {
    vec![
        FilterCriteria::new(),
        FilterCriteria::new().with_search("villa"),
        FilterCriteria::new().with_min_price(210000.0),
        FilterCriteria::new().with_max_price(300000.0),
        FilterCriteria::new().with_min_bedrooms(3.0).with_max_price(500000.0),
        FilterCriteria::new().with_category("villa"),
        FilterCriteria::new().with_category("house"),
        FilterCriteria::new().with_requirement(Amenity::Garden, AmenityRequirement::MustHave),
        FilterCriteria::new().with_requirement(Amenity::Pool, AmenityRequirement::MustNotHave),
        FilterCriteria {
            min_area_square_meters: Some(100.0),
            min_construction_year: Some(2000.0),
            ..FilterCriteria::default()
        },
    ]
}

#[test]
fn test_feed_parses_every_listing() {
    let feed = create_test_feed();
    assert_eq!(ids(&feed), vec![101, 102, 103, 104, 105, 106]);
    assert!(feed[3].attributes.is_none());
}

#[test]
fn test_unset_criteria_only_drops_listings_without_attributes() {
    let feed = create_test_feed();
    let filtered = filter_listings(&feed, &FilterCriteria::new());
    assert_eq!(ids(&filtered), vec![101, 102, 103, 105, 106]);

    let lenient = FilterEngine::new(MissingAttributesPolicy::DefaultAndInclude);
    assert_eq!(lenient.filter(&feed, &FilterCriteria::new()), feed);
}

#[test]
fn test_filtering_is_idempotent() {
    let feed = create_test_feed();
    let engine = FilterEngine::default();

    for criteria in criteria_samples() {
        let once = engine.filter(&feed, &criteria);
        let twice = engine.filter(&once, &criteria);
        assert_eq!(once, twice, "second pass changed result for {criteria:?}");
    }
}

#[test]
fn test_output_preserves_input_order() {
    let feed = create_test_feed();
    let mut reversed = feed.clone();
    reversed.reverse();

    for criteria in criteria_samples() {
        let forward = ids(&filter_listings(&feed, &criteria));
        let mut backward = ids(&filter_listings(&reversed, &criteria));
        backward.reverse();
        assert_eq!(forward, backward, "order not preserved for {criteria:?}");

        let mut sorted = forward.clone();
        sorted.sort_unstable();
        assert_eq!(forward, sorted);
    }
}

#[test]
fn test_tightening_bounds_never_grows_result() {
    let feed = create_test_feed();
    let engine = FilterEngine::default();

    let mut previous = usize::MAX;
    for min_price in [0.0, 1.0, 199999.0, 200000.0, 250000.0, 250001.0, 1e9] {
        let size = engine
            .filter(&feed, &FilterCriteria::new().with_min_price(min_price))
            .len();
        assert!(size <= previous, "raising minPrice to {min_price} grew the result");
        previous = size;
    }

    let mut previous = usize::MAX;
    for max_price in [1e9, 495000.0, 300000.0, 200000.0, 0.0, -1.0] {
        let size = engine
            .filter(&feed, &FilterCriteria::new().with_max_price(max_price))
            .len();
        assert!(size <= previous, "lowering maxPrice to {max_price} grew the result");
        previous = size;
    }
}

#[test]
fn test_missing_price_fails_minimum_passes_maximum() {
    let feed = create_test_feed();

    let min = filter_listings(&feed, &FilterCriteria::new().with_min_price(1.0));
    assert!(!ids(&min).contains(&103));
    assert!(!ids(&min).contains(&106));

    let max = filter_listings(&feed, &FilterCriteria::new().with_max_price(1.0));
    assert_eq!(ids(&max), vec![103, 106]);
}

#[test]
fn test_category_uses_terms_or_flat_type() {
    let feed = create_test_feed();

    let villas = filter_listings(&feed, &FilterCriteria::new().with_category("villa"));
    assert_eq!(ids(&villas), vec![101, 105]);

    let houses = filter_listings(&feed, &FilterCriteria::new().with_category("house"));
    assert_eq!(ids(&houses), vec![103]);

    let none = filter_listings(&feed, &FilterCriteria::new().with_category("bungalow"));
    assert!(none.is_empty());
}

#[test]
fn test_amenity_requirements() {
    let feed = create_test_feed();

    let garden = FilterCriteria::new().with_requirement(Amenity::Garden, AmenityRequirement::MustHave);
    assert_eq!(ids(&filter_listings(&feed, &garden)), vec![101, 105, 106]);

    let no_garage =
        FilterCriteria::new().with_requirement(Amenity::Garage, AmenityRequirement::MustNotHave);
    assert_eq!(ids(&filter_listings(&feed, &no_garage)), vec![101, 103, 106]);
}

#[test]
fn test_search_scenario() {
    let feed = create_test_feed();
    let filtered = filter_listings(&feed, &FilterCriteria::new().with_search("Villa"));
    assert_eq!(ids(&filtered), vec![101, 105]);
}

#[test]
fn test_realistic_combination() {
    let feed = create_test_feed();

    let criteria: FilterCriteria = serde_json::from_value(json!({
        "searchText": "villa",
        "minPrice": 100000,
        "maxPrice": 400000,
        "minBedrooms": 2,
        "selectedCategorySlug": "villa",
        "poolRequirement": "yes"
    }))
    .unwrap();

    let filtered = filter_listings(&feed, &criteria);
    assert_eq!(ids(&filtered), vec![101]);
}

#[test]
fn test_empty_feed() {
    let feed = parse_listings_value(json!({ "code": "rest_no_route" }));
    assert!(filter_listings(&feed, &FilterCriteria::new().with_search("x")).is_empty());
}
