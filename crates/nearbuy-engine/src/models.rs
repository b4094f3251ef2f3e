use chrono::{DateTime, Utc};
use nearbuy_core::models::{AnnotatedProduct, VendorQuery};
use nearbuy_geo::Origin;
use serde::{Deserialize, Serialize};

/// Sort modes supported by the product grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Preserve post-filter order
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    DistanceAsc,
    NameAsc,
    NameDesc,
}

/// Filter criteria supplied by the caller on each invocation
///
/// Every constraint is optional; an absent or blank constraint keeps all
/// products. `vendor_scope` is exact and case-sensitive (storefront
/// semantics), `store_query` is a case-insensitive substring, and the two
/// compose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact-match vendor name restricting results to one storefront
    #[serde(default)]
    pub vendor_scope: Option<String>,

    /// Free-text search over name, vendor, and category
    #[serde(default)]
    pub search_query: Option<String>,

    /// Inclusive price bounds
    #[serde(default)]
    pub price_min: Option<f64>,

    #[serde(default)]
    pub price_max: Option<f64>,

    /// Exact-match classification constraints
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub subcategory: Option<String>,

    /// Case-insensitive substring match against the vendor name
    #[serde(default)]
    pub store_query: Option<String>,

    /// Ordering applied after all filters
    #[serde(default)]
    pub sort_mode: SortMode,
}

impl FilterCriteria {
    /// Create unconstrained criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one vendor's storefront (exact match)
    pub fn with_vendor_scope(mut self, vendor: impl Into<String>) -> Self {
        self.vendor_scope = Some(vendor.into());
        self
    }

    /// Set the free-text search query
    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Set the inclusive price bounds; either side may be `None`
    pub fn with_price_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Restrict to an exact category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to an exact subcategory
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Set the store-name substring query
    pub fn with_store_query(mut self, query: impl Into<String>) -> Self {
        self.store_query = Some(query.into());
        self
    }

    /// Set the sort mode
    pub fn with_sort_mode(mut self, mode: SortMode) -> Self {
        self.sort_mode = mode;
        self
    }
}

/// What to fetch from the Catalog Service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BrowseScope {
    /// One category page
    Category(String),

    /// A vendor-scoped listing
    Vendor(VendorQuery),
}

/// One pipeline invocation: scope, shopper origin, and filter criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseRequest {
    /// What to fetch
    pub scope: BrowseScope,

    /// Resolved shopper position; `None` when geolocation was denied,
    /// unsupported, or timed out
    pub origin: Option<Origin>,

    /// Filter and sort criteria
    pub criteria: FilterCriteria,

    /// Whether to include per-stage explanation in the result
    pub explain: bool,
}

impl BrowseRequest {
    /// Create a category-page request with no filters
    pub fn category(name: impl Into<String>) -> Self {
        Self {
            scope: BrowseScope::Category(name.into()),
            origin: None,
            criteria: FilterCriteria::new(),
            explain: false,
        }
    }

    /// Create a vendor-scoped request with no filters
    pub fn vendor(query: VendorQuery) -> Self {
        Self {
            scope: BrowseScope::Vendor(query),
            origin: None,
            criteria: FilterCriteria::new(),
            explain: false,
        }
    }

    /// Set the shopper origin
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the filter criteria
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Include per-stage explanation in the result
    pub fn with_explain(mut self, enabled: bool) -> Self {
        self.explain = enabled;
        self
    }
}

/// Result of one pipeline invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseResult {
    /// Filtered, annotated, ordered products
    pub products: Vec<AnnotatedProduct>,

    /// Snapshot size before filtering
    pub total_fetched: usize,

    /// When the snapshot was fetched
    pub fetched_at: DateTime<Utc>,

    /// Per-stage explanation, present when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<FilterExplanation>,
}

/// Evaluated/matched counts for one filter stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCounts {
    /// Stage name, in application order
    pub stage: String,

    /// Whether the criteria activated this stage
    pub applied: bool,

    /// Products entering the stage
    pub evaluated: usize,

    /// Products surviving the stage
    pub matched: usize,
}

/// Explanation of a full filter-rank pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterExplanation {
    /// One entry per filter stage, in the fixed application order
    pub stages: Vec<StageCounts>,

    /// Sort mode applied after filtering
    pub sort_mode: SortMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&SortMode::PriceAsc).unwrap(), "\"price-asc\"");
        assert_eq!(serde_json::to_string(&SortMode::None).unwrap(), "\"none\"");
        assert_eq!(
            serde_json::from_str::<SortMode>("\"distance-asc\"").unwrap(),
            SortMode::DistanceAsc
        );
    }

    #[test]
    fn test_criteria_default_is_unconstrained() {
        let criteria = FilterCriteria::new();
        assert!(criteria.vendor_scope.is_none());
        assert!(criteria.search_query.is_none());
        assert!(criteria.price_min.is_none());
        assert!(criteria.price_max.is_none());
        assert_eq!(criteria.sort_mode, SortMode::None);
    }

    #[test]
    fn test_criteria_builder_chains() {
        let criteria = FilterCriteria::new()
            .with_vendor_scope("Sunrise Stores")
            .with_price_bounds(Some(10.0), Some(500.0))
            .with_sort_mode(SortMode::PriceDesc);

        assert_eq!(criteria.vendor_scope.as_deref(), Some("Sunrise Stores"));
        assert_eq!(criteria.price_min, Some(10.0));
        assert_eq!(criteria.price_max, Some(500.0));
        assert_eq!(criteria.sort_mode, SortMode::PriceDesc);
    }

    #[test]
    fn test_criteria_deserializes_with_missing_fields() {
        let criteria: FilterCriteria = serde_json::from_str("{}").unwrap();
        assert_eq!(criteria, FilterCriteria::new());

        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"search_query": "rice", "sort_mode": "name-desc"}"#).unwrap();
        assert_eq!(criteria.search_query.as_deref(), Some("rice"));
        assert_eq!(criteria.sort_mode, SortMode::NameDesc);
    }
}
