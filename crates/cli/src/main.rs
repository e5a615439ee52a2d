use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use filter_engine::{AmenityRequirement, FilterCriteria, FilterEngine, MissingAttributesPolicy};
use listing_feed::{Amenity, ListingCatalog, ListingId};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

mod display;

/// Listings - browse a property feed snapshot with filters
#[derive(Parser)]
#[command(name = "listings")]
#[command(about = "Filter and browse property listings from a content API snapshot", long_about = None)]
struct Cli {
    /// Directory holding listings.json and property_types.json
    #[arg(short, long, env = "LISTINGS_DATA_DIR", default_value = "data/sample")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List listings matching the given criteria
    Filter {
        #[command(flatten)]
        criteria: CriteriaArgs,

        /// JSON file with base criteria; flags override its values
        #[arg(long)]
        criteria_file: Option<PathBuf>,

        /// Keep listings without custom field data, treating every field as unset
        #[arg(long)]
        include_incomplete: bool,

        /// Maximum number of listings to print
        #[arg(long)]
        limit: Option<usize>,

        /// Print matching listings as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show the detail view for one listing
    Show {
        /// Listing ID to display
        #[arg(long)]
        id: ListingId,
    },

    /// List property types and how many listings carry each
    Categories,
}

/// Yes/no answer for an amenity control
#[derive(Clone, Copy, ValueEnum)]
enum YesNo {
    Yes,
    No,
}

impl From<YesNo> for AmenityRequirement {
    fn from(answer: YesNo) -> Self {
        match answer {
            YesNo::Yes => AmenityRequirement::MustHave,
            YesNo::No => AmenityRequirement::MustNotHave,
        }
    }
}

#[derive(Args)]
struct CriteriaArgs {
    /// Case-insensitive title search
    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    min_price: Option<f64>,

    #[arg(long)]
    max_price: Option<f64>,

    #[arg(long)]
    min_bedrooms: Option<f64>,

    #[arg(long)]
    min_bathrooms: Option<f64>,

    /// Minimum area in square meters
    #[arg(long)]
    min_area: Option<f64>,

    /// Minimum construction year
    #[arg(long)]
    min_year: Option<f64>,

    /// Property type slug (e.g. villa)
    #[arg(long)]
    category: Option<String>,

    #[arg(long, value_enum)]
    garden: Option<YesNo>,

    #[arg(long, value_enum)]
    pool: Option<YesNo>,

    #[arg(long, value_enum)]
    garage: Option<YesNo>,

    #[arg(long, value_enum)]
    driveway: Option<YesNo>,
}

impl CriteriaArgs {
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.search,
            min_price: self.min_price,
            max_price: self.max_price,
            min_bedrooms: self.min_bedrooms,
            min_bathrooms: self.min_bathrooms,
            min_area_square_meters: self.min_area,
            min_construction_year: self.min_year,
            selected_category_slug: self.category,
            garden_requirement: self.garden.map(Into::into),
            pool_requirement: self.pool.map(Into::into),
            garage_requirement: self.garage.map(Into::into),
            driveway_requirement: self.driveway.map(Into::into),
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = ListingCatalog::load_from_files(&cli.data_dir)
        .with_context(|| format!("Failed to load listing feed from {}", cli.data_dir.display()))?;
    tracing::debug!(elapsed = ?start.elapsed(), "Catalog ready");

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter {
            criteria,
            criteria_file,
            include_incomplete,
            limit,
            json,
        } => {
            let criteria = build_criteria(criteria, criteria_file.as_deref())?;
            let policy = if include_incomplete {
                MissingAttributesPolicy::DefaultAndInclude
            } else {
                MissingAttributesPolicy::Exclude
            };
            handle_filter(&catalog, &criteria, policy, limit, json)?
        }
        Commands::Show { id } => handle_show(&catalog, id)?,
        Commands::Categories => handle_categories(&catalog),
    }

    Ok(())
}

/// Base criteria from the optional file, overlaid with any flags given
fn build_criteria(args: CriteriaArgs, criteria_file: Option<&Path>) -> Result<FilterCriteria> {
    let mut criteria = match criteria_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read criteria file {}", path.display()))?;
            serde_json::from_str::<FilterCriteria>(&text)
                .with_context(|| format!("Invalid criteria in {}", path.display()))?
        }
        None => FilterCriteria::new(),
    };
    criteria.merge(args.into_criteria());
    Ok(criteria)
}

/// Handle the 'filter' command
fn handle_filter(
    catalog: &ListingCatalog,
    criteria: &FilterCriteria,
    policy: MissingAttributesPolicy,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let engine = FilterEngine::new(policy);
    let filtered = engine.filter(catalog.listings(), criteria);
    let shown = &filtered[..limit.unwrap_or(filtered.len()).min(filtered.len())];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!(
            "{} No listings match the current filters ({} loaded).",
            "✗".yellow(),
            catalog.listings().len()
        );
        return Ok(());
    }

    println!(
        "{} of {} listings match",
        filtered.len().to_string().bold(),
        catalog.listings().len()
    );
    for listing in shown {
        println!("{}", display::format_card(listing));
    }
    if shown.len() < filtered.len() {
        println!("{}", format!("... {} more", filtered.len() - shown.len()).dimmed());
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &ListingCatalog, id: ListingId) -> Result<()> {
    let listing = catalog
        .get_listing(id)
        .ok_or_else(|| anyhow!("Listing {} not found", id))?;
    println!("{}", display::format_detail(listing, catalog));
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(catalog: &ListingCatalog) {
    let counts = catalog.category_counts();

    println!("{}", "Property types:".bold().blue());
    if catalog.categories().is_empty() {
        println!("  (no category terms loaded)");
    }
    for term in catalog.categories() {
        let count = counts.get(term.slug.as_str()).copied().unwrap_or(0);
        println!("  - {} [{}]: {} listings", term.display_name, term.slug, count);
    }

    let (listings, _, incomplete) = catalog.counts();
    let amenity_counts: Vec<String> = Amenity::ALL
        .iter()
        .map(|&amenity| {
            let with = catalog
                .listings()
                .iter()
                .filter(|l| l.attributes_or_empty().flag(amenity))
                .count();
            format!("{} {}", with, amenity.label())
        })
        .collect();
    println!(
        "{}{} listings ({} without custom fields); {}",
        "• ".cyan(),
        listings,
        incomplete,
        amenity_counts.join(", ")
    );
}
