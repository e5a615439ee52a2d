use listing_feed::ListingCatalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data/sample");

    println!("Loading listing feed...\n");

    let start = Instant::now();
    let catalog = ListingCatalog::load_from_files(data_dir)
        .expect("Failed to load listing feed");
    let elapsed = start.elapsed();

    let (listings, categories, incomplete) = catalog.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Listings: {}", listings);
    println!("Categories: {}", categories);
    println!("Listings without custom fields: {}", incomplete);
}
