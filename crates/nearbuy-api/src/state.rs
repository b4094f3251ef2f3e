use nearbuy_core::ports::CatalogSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self { catalog }
    }
}
