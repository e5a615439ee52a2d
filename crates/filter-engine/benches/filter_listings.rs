//! Benchmarks for the filter engine
//!
//! Run with: cargo bench --package filter-engine
//!
//! Uses a synthetic feed of 10k listings with mixed attribute shapes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filter_engine::{AmenityRequirement, FilterCriteria, FilterEngine};
use listing_feed::{Amenity, AttributeValue, ListingAttributes, ListingRecord};

const SLUGS: [&str; 4] = ["villa", "apartment", "house", "studio"];

fn synthetic_feed(size: u64) -> Vec<ListingRecord> {
    (0..size)
        .map(|i| {
            let price = match i % 3 {
                0 => Some(AttributeValue::Text(format!("{}", 100_000 + i * 37))),
                1 => Some(AttributeValue::Number((150_000 + i * 11) as f64)),
                _ => None,
            };
            let attributes = ListingAttributes {
                price,
                bedrooms: Some(AttributeValue::Number((i % 6) as f64)),
                has_garden: Some(AttributeValue::Text((if i % 2 == 0 { "1" } else { "0" }).to_string())),
                has_pool: Some(AttributeValue::Bool(i % 5 == 0)),
                ..ListingAttributes::default()
            };
            let slug = SLUGS[(i % SLUGS.len() as u64) as usize];
            ListingRecord::new(i, format!("Listing {i} {slug}"))
                .with_attributes(attributes)
                .with_category(slug)
        })
        .collect()
}

fn bench_unset_criteria(c: &mut Criterion) {
    let feed = synthetic_feed(10_000);
    let engine = FilterEngine::default();
    let criteria = FilterCriteria::new();

    c.bench_function("filter_unset_criteria", |b| {
        b.iter(|| black_box(engine.filter(black_box(&feed), black_box(&criteria))))
    });
}

fn bench_full_criteria(c: &mut Criterion) {
    let feed = synthetic_feed(10_000);
    let engine = FilterEngine::default();
    let criteria = FilterCriteria::new()
        .with_search("villa")
        .with_min_price(150_000.0)
        .with_max_price(400_000.0)
        .with_min_bedrooms(2.0)
        .with_category("villa")
        .with_requirement(Amenity::Garden, AmenityRequirement::MustHave);

    c.bench_function("filter_full_criteria", |b| {
        b.iter(|| black_box(engine.filter(black_box(&feed), black_box(&criteria))))
    });
}

criterion_group!(benches, bench_unset_criteria, bench_full_criteria);
criterion_main!(benches);
