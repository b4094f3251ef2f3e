use serde::Deserialize;

use nearbuy_core::models::{find_category, VendorQuery};
use nearbuy_engine::{BrowseRequest, BrowseScope, FilterCriteria};
use nearbuy_geo::Origin;

use crate::error::ApiError;

/// Shopper position as sent by the UI
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OriginDto {
    pub lat: f64,
    pub lon: f64,
}

/// Display-products request body
///
/// Exactly one scope: a `category` from the category table, or a vendor
/// query (any combination of `vendor`, `seller_id`, `status`, including
/// none for a full listing). All filter fields are optional.
#[derive(Debug, Deserialize)]
pub struct DisplayProductsRequest {
    pub category: Option<String>,

    pub vendor: Option<String>,
    pub seller_id: Option<String>,
    pub status: Option<String>,

    pub origin: Option<OriginDto>,

    #[serde(flatten)]
    pub criteria: FilterCriteria,

    #[serde(default)]
    pub explain: bool,
}

impl DisplayProductsRequest {
    /// Validate and convert into a pipeline request
    pub fn into_browse_request(self) -> Result<BrowseRequest, ApiError> {
        let scope = match self.category {
            Some(name) => {
                let spec = find_category(&name).ok_or_else(|| {
                    ApiError::not_found(format!("Unknown category: {}", name))
                })?;
                BrowseScope::Category(spec.name.to_string())
            }
            None => BrowseScope::Vendor(VendorQuery {
                vendor: self.vendor,
                seller_id: self.seller_id,
                status: self.status,
            }),
        };

        let origin = match self.origin {
            Some(dto) => Some(
                Origin::new(dto.lat, dto.lon)
                    .map_err(|e| ApiError::bad_request(e.to_string()))?,
            ),
            None => None,
        };

        Ok(BrowseRequest {
            scope,
            origin,
            criteria: self.criteria,
            explain: self.explain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearbuy_engine::SortMode;

    #[test]
    fn test_category_request_parses_with_flattened_criteria() {
        let request: DisplayProductsRequest = serde_json::from_str(
            r#"{
                "category": "groceries",
                "origin": {"lat": 12.9, "lon": 77.6},
                "search_query": "rice",
                "sort_mode": "price-asc"
            }"#,
        )
        .unwrap();

        assert_eq!(request.criteria.search_query.as_deref(), Some("rice"));
        assert_eq!(request.criteria.sort_mode, SortMode::PriceAsc);

        let browse = request.into_browse_request().unwrap();
        assert!(matches!(browse.scope, BrowseScope::Category(ref name) if name == "groceries"));
        assert!(browse.origin.is_some());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let request: DisplayProductsRequest =
            serde_json::from_str(r#"{"category": "spaceships"}"#).unwrap();

        let err = request.into_browse_request().unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_category_falls_back_to_vendor_scope() {
        let request: DisplayProductsRequest =
            serde_json::from_str(r#"{"vendor": "Sunrise Stores"}"#).unwrap();

        let browse = request.into_browse_request().unwrap();
        match browse.scope {
            BrowseScope::Vendor(query) => {
                assert_eq!(query.vendor.as_deref(), Some("Sunrise Stores"));
            }
            other => panic!("Expected vendor scope, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let request: DisplayProductsRequest =
            serde_json::from_str(r#"{"origin": {"lat": 120.0, "lon": 0.0}}"#).unwrap();

        let err = request.into_browse_request().unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }
}
