use axum::{response::IntoResponse, Json};
use nearbuy_core::models::categories;

use crate::dto::CategoryView;

pub async fn list_categories() -> impl IntoResponse {
    let views: Vec<CategoryView> = categories()
        .iter()
        .map(|spec| CategoryView {
            name: spec.name,
            subcategories: spec.subcategories,
        })
        .collect();

    Json(views)
}
