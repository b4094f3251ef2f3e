use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use nearbuy_catalog::HttpCatalog;
use nearbuy_core::config::LayeredConfig;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nearbuy_api::create_router;
use nearbuy_api::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nearbuy_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LayeredConfig::with_defaults().load_from_env();
    let port = config.port.value;
    let catalog_url = config.catalog_url.value.clone();
    let timeout_secs = config.timeout_secs.value;

    tracing::info!(
        port = port,
        catalog_url = %catalog_url,
        timeout_secs = timeout_secs,
        "Starting Nearbuy API server"
    );

    let catalog = Arc::new(HttpCatalog::new(catalog_url, timeout_secs));
    let state = Arc::new(AppState::new(catalog));

    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = create_router(state).layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for http://localhost:3000");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
