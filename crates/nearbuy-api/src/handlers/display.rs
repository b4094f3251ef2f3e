use std::sync::Arc;

use axum::{extract::State, Json};
use nearbuy_engine::{BrowseResult, DisplayPipeline};

use crate::dto::DisplayProductsRequest;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn display_products(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DisplayProductsRequest>,
) -> Result<Json<BrowseResult>, ApiError> {
    tracing::info!(
        category = request.category.as_deref().unwrap_or("-"),
        vendor = request.vendor.as_deref().unwrap_or("-"),
        has_origin = request.origin.is_some(),
        sort_mode = ?request.criteria.sort_mode,
        "Processing display request"
    );

    let browse = request.into_browse_request()?;

    let pipeline = DisplayPipeline::new(state.catalog.clone());
    let result = pipeline.execute(&browse).await?;

    Ok(Json(result))
}
