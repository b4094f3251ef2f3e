use nearbuy_core::error::Result;
use nearbuy_core::models::{AnnotatedProduct, Product};
use nearbuy_core::ports::CatalogSource;
use nearbuy_geo::{annotate, Origin};

use crate::filter::apply_filters;
use crate::models::{
    BrowseRequest, BrowseResult, BrowseScope, FilterCriteria, FilterExplanation,
};
use crate::sort::rank;

/// Filter and order an annotated product list
///
/// Pure function of (products, criteria): the input is never modified, and
/// repeated application with the same criteria is a no-op on its own output.
pub fn filter_and_rank(
    products: &[AnnotatedProduct],
    criteria: &FilterCriteria,
) -> Vec<AnnotatedProduct> {
    filter_and_rank_explained(products, criteria).0
}

/// As [`filter_and_rank`], also returning per-stage counts
pub fn filter_and_rank_explained(
    products: &[AnnotatedProduct],
    criteria: &FilterCriteria,
) -> (Vec<AnnotatedProduct>, FilterExplanation) {
    let (filtered, stages) = apply_filters(products, criteria);
    let ranked = rank(filtered, criteria.sort_mode);
    (ranked, FilterExplanation { stages, sort_mode: criteria.sort_mode })
}

/// The single entry point behind every product grid
///
/// Annotates distances from the shopper's resolved position (or the fallback
/// when none is available), then filters and orders.
pub fn display_products(
    products: &[Product],
    origin: Option<Origin>,
    criteria: &FilterCriteria,
) -> Vec<AnnotatedProduct> {
    let annotated = annotate(products, origin);
    filter_and_rank(&annotated, criteria)
}

/// Display pipeline orchestrating fetch, annotation, filtering, and ranking
pub struct DisplayPipeline<S>
where
    S: CatalogSource,
{
    source: S,
}

impl<S> DisplayPipeline<S>
where
    S: CatalogSource,
{
    /// Create a new pipeline over a catalog source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Execute one browse request
    ///
    /// The only error source is the catalog fetch; annotation and filtering
    /// are total.
    pub async fn execute(&self, request: &BrowseRequest) -> Result<BrowseResult> {
        let snapshot = match &request.scope {
            BrowseScope::Category(name) => self.source.products_in_category(name).await?,
            BrowseScope::Vendor(query) => self.source.products_for_vendor(query).await?,
        };

        let total_fetched = snapshot.products.len();
        tracing::debug!(total_fetched, "catalog snapshot fetched");

        let annotated = annotate(&snapshot.products, request.origin);
        let (products, explanation) = filter_and_rank_explained(&annotated, &request.criteria);

        Ok(BrowseResult {
            products,
            total_fetched,
            fetched_at: snapshot.fetched_at,
            explanation: request.explain.then_some(explanation),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortMode;
    use async_trait::async_trait;
    use nearbuy_core::models::{CatalogSnapshot, VendorQuery};

    struct FixedCatalog {
        products: Vec<Product>,
    }

    #[async_trait]
    impl CatalogSource for FixedCatalog {
        async fn products_in_category(&self, category: &str) -> Result<CatalogSnapshot> {
            let products = self
                .products
                .iter()
                .filter(|p| p.category.as_deref() == Some(category))
                .cloned()
                .collect();
            Ok(CatalogSnapshot::new(products))
        }

        async fn products_for_vendor(&self, query: &VendorQuery) -> Result<CatalogSnapshot> {
            let products = self
                .products
                .iter()
                .filter(|p| match &query.vendor {
                    Some(vendor) => p.vendor.as_deref() == Some(vendor.as_str()),
                    None => true,
                })
                .cloned()
                .collect();
            Ok(CatalogSnapshot::new(products))
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new("1", "A", 100.0)
                .with_vendor("X")
                .with_category("groceries")
                .with_location(0.0, 0.0),
            Product::new("2", "B", 50.0)
                .with_vendor("Y")
                .with_category("groceries")
                .with_location(0.0, 1.0),
        ]
    }

    #[test]
    fn test_price_asc_orders_b_before_a() {
        let origin = Origin::new(0.0, 0.0).unwrap();
        let criteria = FilterCriteria::new().with_sort_mode(SortMode::PriceAsc);

        let result = display_products(&sample_products(), Some(origin), &criteria);

        let names: Vec<&str> = result.iter().map(|p| p.product.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_distance_asc_orders_a_before_b() {
        let origin = Origin::new(0.0, 0.0).unwrap();
        let criteria = FilterCriteria::new().with_sort_mode(SortMode::DistanceAsc);

        let result = display_products(&sample_products(), Some(origin), &criteria);

        let names: Vec<&str> = result.iter().map(|p| p.product.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(result[0].distance_km, 0.0);
        // One degree of longitude at the equator
        assert!((result[1].distance_km - 111.2).abs() < 0.1);
    }

    #[test]
    fn test_filter_and_rank_never_mutates_input() {
        let origin = Origin::new(0.0, 0.0).unwrap();
        let annotated = annotate(&sample_products(), Some(origin));
        let before = annotated.clone();

        let criteria = FilterCriteria::new()
            .with_vendor_scope("X")
            .with_sort_mode(SortMode::PriceDesc);
        let _ = filter_and_rank(&annotated, &criteria);

        assert_eq!(annotated, before);
    }

    #[test]
    fn test_filter_and_rank_is_idempotent() {
        let annotated = annotate(&sample_products(), None);
        let criteria = FilterCriteria::new()
            .with_search_query("a")
            .with_sort_mode(SortMode::NameAsc);

        let once = filter_and_rank(&annotated, &criteria);
        let twice = filter_and_rank(&once, &criteria);

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_pipeline_category_scope() {
        let pipeline = DisplayPipeline::new(FixedCatalog { products: sample_products() });

        let request = BrowseRequest::category("groceries")
            .with_criteria(FilterCriteria::new().with_sort_mode(SortMode::PriceAsc));
        let result = pipeline.execute(&request).await.unwrap();

        assert_eq!(result.total_fetched, 2);
        assert_eq!(result.products.len(), 2);
        assert_eq!(result.products[0].product.name, "B");
        assert!(result.explanation.is_none());
    }

    #[tokio::test]
    async fn test_pipeline_vendor_scope_with_explanation() {
        let pipeline = DisplayPipeline::new(FixedCatalog { products: sample_products() });

        let request = BrowseRequest::vendor(VendorQuery::new().with_vendor("X")).with_explain(true);
        let result = pipeline.execute(&request).await.unwrap();

        assert_eq!(result.total_fetched, 1);
        let explanation = result.explanation.unwrap();
        assert_eq!(explanation.stages.len(), 6);
        assert_eq!(explanation.sort_mode, SortMode::None);
    }

    #[tokio::test]
    async fn test_pipeline_without_origin_uses_fallback() {
        let pipeline = DisplayPipeline::new(FixedCatalog { products: sample_products() });

        let request = BrowseRequest::category("groceries");
        let result = pipeline.execute(&request).await.unwrap();

        for product in &result.products {
            assert_eq!(product.distance_km, 5.0);
            assert_eq!(product.distance_label, "Within 5km");
        }
    }
}
