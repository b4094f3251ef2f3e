use serde::{Deserialize, Serialize};

/// Per-category configuration: the category string the Catalog Service
/// recognizes plus its subcategory taxonomy
///
/// Category pages differ only in these two values; everything else goes
/// through the shared pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySpec {
    /// Category name as used by `GET /api/products/category/{name}`
    pub name: &'static str,

    /// Subcategories offered for this category, in display order
    pub subcategories: &'static [&'static str],
}

/// The storefront category table
///
/// One entry per category page. Adding a category is a table edit, not a new
/// code path.
pub fn categories() -> &'static [CategorySpec] {
    const CATEGORIES: &[CategorySpec] = &[
        CategorySpec {
            name: "groceries",
            subcategories: &["staples", "snacks", "beverages", "spices"],
        },
        CategorySpec {
            name: "vegetables",
            subcategories: &["leafy", "root", "exotic"],
        },
        CategorySpec {
            name: "fruits",
            subcategories: &["seasonal", "citrus", "imported"],
        },
        CategorySpec {
            name: "dairy",
            subcategories: &["milk", "cheese", "butter", "yogurt"],
        },
        CategorySpec {
            name: "bakery",
            subcategories: &["bread", "cakes", "cookies"],
        },
        CategorySpec {
            name: "meat",
            subcategories: &["poultry", "mutton", "seafood"],
        },
        CategorySpec {
            name: "electronics",
            subcategories: &["audio", "cameras", "accessories"],
        },
        CategorySpec {
            name: "mobiles",
            subcategories: &["smartphones", "feature-phones", "tablets"],
        },
        CategorySpec {
            name: "appliances",
            subcategories: &["kitchen", "laundry", "cooling"],
        },
        CategorySpec {
            name: "fashion",
            subcategories: &["men", "women", "kids"],
        },
        CategorySpec {
            name: "footwear",
            subcategories: &["casual", "sports", "formal"],
        },
        CategorySpec {
            name: "furniture",
            subcategories: &["living-room", "bedroom", "office"],
        },
        CategorySpec {
            name: "books",
            subcategories: &["fiction", "academic", "children"],
        },
        CategorySpec {
            name: "toys",
            subcategories: &["educational", "outdoor", "board-games"],
        },
        CategorySpec {
            name: "beauty",
            subcategories: &["skincare", "haircare", "fragrance"],
        },
        CategorySpec {
            name: "sports",
            subcategories: &["fitness", "cricket", "cycling"],
        },
        CategorySpec {
            name: "stationery",
            subcategories: &["writing", "office", "art"],
        },
        CategorySpec {
            name: "medicines",
            subcategories: &["otc", "wellness", "devices"],
        },
        CategorySpec {
            name: "pets",
            subcategories: &["food", "grooming", "toys"],
        },
        CategorySpec {
            name: "hardware",
            subcategories: &["tools", "electrical", "plumbing"],
        },
    ];
    CATEGORIES
}

/// Look up a category by name, ignoring ASCII case
pub fn find_category(name: &str) -> Option<&'static CategorySpec> {
    categories().iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Vendor-scoped catalog query
///
/// Mirrors `GET /api/products?vendor=&sellerId=&status=`. Absent fields
/// place no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorQuery {
    /// Exact vendor display name
    pub vendor: Option<String>,

    /// Seller account identifier
    pub seller_id: Option<String>,

    /// Listing status (e.g. "approved", "pending")
    pub status: Option<String>,
}

impl VendorQuery {
    /// Create an unconstrained query
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one vendor
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    /// Restrict to one seller account
    pub fn with_seller_id(mut self, seller_id: impl Into<String>) -> Self {
        self.seller_id = Some(seller_id.into());
        self
    }

    /// Restrict to one listing status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Check if the query places no constraint
    pub fn is_empty(&self) -> bool {
        self.vendor.is_none() && self.seller_id.is_none() && self.status.is_none()
    }
}
