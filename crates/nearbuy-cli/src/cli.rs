use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Nearbuy - Geo-aware catalog browser
#[derive(Parser, Debug)]
#[command(name = "nearbuy")]
#[command(about = "Geo-aware catalog browser", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Show per-stage filter counts
    #[arg(long, global = true)]
    pub explain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a category page or a vendor storefront
    Browse(BrowseArgs),

    /// Show the storefront category table
    Categories,
}

#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Category to browse; omit to run a vendor-scoped listing
    pub category: Option<String>,

    /// Vendor name. With a category this is an exact client-side scope;
    /// without one it becomes the upstream vendor query.
    #[arg(long)]
    pub vendor: Option<String>,

    /// Seller account id (vendor listings only)
    #[arg(long)]
    pub seller_id: Option<String>,

    /// Listing status, e.g. "approved" (vendor listings only)
    #[arg(long)]
    pub status: Option<String>,

    /// Free-text search over name, vendor, and category
    #[arg(long)]
    pub search: Option<String>,

    /// Inclusive minimum price
    #[arg(long)]
    pub price_min: Option<f64>,

    /// Inclusive maximum price
    #[arg(long)]
    pub price_max: Option<f64>,

    /// Exact subcategory
    #[arg(long)]
    pub subcategory: Option<String>,

    /// Store name substring filter
    #[arg(long)]
    pub store: Option<String>,

    /// Sort mode (none, price-asc, price-desc, distance-asc, name-asc, name-desc)
    #[arg(long, default_value = "none")]
    pub sort: String,

    /// Shopper latitude in degrees
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Shopper longitude in degrees
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Catalog Service base URL (overrides NEARBUY_CATALOG_URL)
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Read products from a JSON snapshot file instead of the service
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
