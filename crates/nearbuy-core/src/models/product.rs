use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a product within one catalog snapshot
///
/// The Catalog Service is inconsistent about id types (some endpoints return
/// strings, others numbers), so deserialization accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProductId(pub String);

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Ok(ProductId(s)),
            RawId::Number(n) => Ok(ProductId(n.to_string())),
        }
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A product as supplied by the Catalog Service
///
/// Optional fields may be absent in upstream responses. Filters treat a
/// missing field as non-matching rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,

    /// Display name, used for search and sorting
    #[serde(default)]
    pub name: String,

    /// Seller/store display name
    #[serde(default)]
    pub vendor: Option<String>,

    /// Classification strings
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub subcategory: Option<String>,

    /// Non-negative amount in the storefront currency
    #[serde(default)]
    pub price: f64,

    /// WGS-84 coordinates of the fulfillment point
    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lon: Option<f64>,

    /// Opaque pass-through fields, not consumed by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl Product {
    /// Create a product with only the fields the engine consumes
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId(id.into()),
            name: name.into(),
            vendor: None,
            category: None,
            subcategory: None,
            price,
            lat: None,
            lon: None,
            seller_id: None,
            status: None,
            description: None,
            image_url: None,
            stock: None,
        }
    }

    /// Set the vendor name
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the subcategory
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Set the fulfillment point coordinates
    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }

    /// Check if both coordinates are present
    pub fn has_location(&self) -> bool {
        self.lat.is_some() && self.lon.is_some()
    }
}

/// A product with derived distance fields attached
///
/// Every output element retains the full original product; the two derived
/// fields are computed per invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedProduct {
    #[serde(flatten)]
    pub product: Product,

    /// Great-circle distance from the shopper in kilometers, rounded to one
    /// decimal. 5.0 when no origin is available, 999.0 when the product has
    /// no coordinates.
    pub distance_km: f64,

    /// Human-readable rendering of `distance_km`
    pub distance_label: String,
}

/// The authoritative product snapshot for one invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Products as returned by the Catalog Service
    pub products: Vec<Product>,

    /// When the snapshot was fetched
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// Create a snapshot stamped with the current time
    pub fn new(products: Vec<Product>) -> Self {
        Self { products, fetched_at: Utc::now() }
    }
}
