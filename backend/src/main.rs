use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod domain;
mod rest;
mod storage;

use domain::ContentService;
use rest::AppState;
use storage::{ContentStore, JsonContentStore, MemoryContentStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Content either comes from a JSON data directory (the scrapers' drop
    // zone) or, for a fresh checkout, from a small in-memory sample set.
    let data_dir = std::env::var("CITY_GUIDE_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));
    let store: Arc<dyn ContentStore> = if data_dir.is_dir() {
        info!("Serving content from {}", data_dir.display());
        Arc::new(JsonContentStore::new(data_dir))
    } else {
        info!("No data directory found, serving sample content");
        Arc::new(MemoryContentStore::with_sample_data())
    };

    let state = AppState::new(ContentService::new(store));

    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/dashboard", get(rest::dashboard))
        .route("/events", get(rest::list_events))
        .route("/restaurants", get(rest::list_restaurants))
        .route("/attractions", get(rest::list_attractions))
        .route("/playgrounds", get(rest::list_playgrounds));

    let app = Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
