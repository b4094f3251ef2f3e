use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tabled::Tabled;

use nearbuy_catalog::{HttpCatalog, MemoryCatalog};
use nearbuy_core::config::{CliConfigOverrides, LayeredConfig};
use nearbuy_core::models::{categories, find_category, Product, VendorQuery};
use nearbuy_core::ports::CatalogSource;
use nearbuy_engine::{
    BrowseRequest, BrowseResult, BrowseScope, DisplayPipeline, FilterCriteria, SortMode,
};
use nearbuy_geo::Origin;

use crate::cli::BrowseArgs;
use crate::output::OutputWriter;

pub async fn execute(args: BrowseArgs, output: &OutputWriter, explain: bool) -> Result<()> {
    let mut config = LayeredConfig::with_defaults().load_from_env();
    config.update_from_cli(CliConfigOverrides {
        catalog_url: args.catalog_url.clone(),
        timeout_secs: args.timeout_secs,
        port: None,
    });

    let sort_mode = parse_sort_mode(&args.sort)?;

    let origin = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(Origin::new(lat, lon)?),
        _ => None,
    };

    if args.category.is_some() && (args.seller_id.is_some() || args.status.is_some()) {
        output.warning(
            "--seller-id and --status apply to vendor listings and are ignored with a category",
        );
    }

    // With a category, --vendor is a client-side exact scope over the
    // category snapshot. Without one, it becomes the upstream vendor query.
    let (scope, vendor_scope) = match &args.category {
        Some(name) => {
            let spec = find_category(name).ok_or_else(|| {
                let known: Vec<&str> = categories().iter().map(|c| c.name).collect();
                anyhow::anyhow!("Unknown category '{}'. Known categories: {}", name, known.join(", "))
            })?;
            (BrowseScope::Category(spec.name.to_string()), args.vendor.clone())
        }
        None => {
            let query = VendorQuery {
                vendor: args.vendor.clone(),
                seller_id: args.seller_id.clone(),
                status: args.status.clone(),
            };
            (BrowseScope::Vendor(query), None)
        }
    };

    let mut criteria = FilterCriteria::new().with_sort_mode(sort_mode);
    criteria.vendor_scope = vendor_scope;
    criteria.search_query = args.search.clone();
    criteria.price_min = args.price_min;
    criteria.price_max = args.price_max;
    criteria.subcategory = args.subcategory.clone();
    criteria.store_query = args.store.clone();

    let request = BrowseRequest { scope, origin, criteria, explain };

    // Display browse plan
    output.section("Browse Plan");
    match &request.scope {
        BrowseScope::Category(name) => output.kv("Category", name),
        BrowseScope::Vendor(query) => {
            output.kv("Vendor", query.vendor.as_deref().unwrap_or("(any)"));
            if let Some(seller_id) = &query.seller_id {
                output.kv("Seller", seller_id);
            }
            if let Some(status) = &query.status {
                output.kv("Status", status);
            }
        }
    }
    match origin {
        Some(origin) => output.kv("Origin", format!("{}, {}", origin.lat, origin.lon)),
        None => output.kv("Origin", "None (distances fall back to \"Within 5km\")"),
    }
    output.kv("Sort", &args.sort);

    // Pick the catalog source
    let source: Arc<dyn CatalogSource> = match &args.file {
        Some(path) => Arc::new(load_snapshot(path)?),
        None => Arc::new(HttpCatalog::new(
            config.catalog_url.value.clone(),
            config.timeout_secs.value,
        )),
    };

    let pipeline = DisplayPipeline::new(source);
    let result = pipeline.execute(&request).await.context("Failed to browse catalog")?;

    render(output, &result, explain)
}

/// Load a product snapshot from a JSON file
fn load_snapshot(path: &Path) -> Result<MemoryCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;
    let products: Vec<Product> =
        serde_json::from_str(&content).context("Snapshot must be a JSON array of products")?;

    Ok(MemoryCatalog::with_products(products))
}

/// Parse a sort mode string
fn parse_sort_mode(s: &str) -> Result<SortMode> {
    match s.to_lowercase().as_str() {
        "none" => Ok(SortMode::None),
        "price-asc" => Ok(SortMode::PriceAsc),
        "price-desc" => Ok(SortMode::PriceDesc),
        "distance-asc" => Ok(SortMode::DistanceAsc),
        "name-asc" => Ok(SortMode::NameAsc),
        "name-desc" => Ok(SortMode::NameDesc),
        _ => bail!(
            "Invalid sort mode: {}. Use none, price-asc, price-desc, distance-asc, name-asc, or name-desc",
            s
        ),
    }
}

#[derive(Tabled, serde::Serialize)]
struct ProductRow {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Vendor")]
    vendor: String,

    #[tabled(rename = "Price")]
    price: String,

    #[tabled(rename = "Distance")]
    distance: String,

    #[tabled(rename = "Category")]
    category: String,
}

fn render(output: &OutputWriter, result: &BrowseResult, explain: bool) -> Result<()> {
    if output.is_json() {
        return output.result(result);
    }

    output.section("Results");
    output.info(format!(
        "{} of {} products after filtering (snapshot from {})",
        result.products.len(),
        result.total_fetched,
        result.fetched_at.format("%H:%M:%S")
    ));

    let rows: Vec<ProductRow> = result
        .products
        .iter()
        .map(|p| ProductRow {
            name: p.product.name.clone(),
            vendor: p.product.vendor.clone().unwrap_or_else(|| "-".to_string()),
            price: format!("₹{}", p.product.price),
            distance: p.distance_label.clone(),
            category: p.product.category.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    output.table(rows);

    if explain {
        if let Some(explanation) = &result.explanation {
            output.section("Filter Stages");
            for stage in &explanation.stages {
                if stage.applied {
                    output.kv(&stage.stage, format!("{} -> {}", stage.evaluated, stage.matched));
                } else {
                    output.kv(&stage.stage, "not applied");
                }
            }
            output.kv("sort", format!("{:?}", explanation.sort_mode));
        }
    }

    Ok(())
}
