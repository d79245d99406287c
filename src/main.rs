use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod logging;
mod routes;
mod services;
pub mod models;

use models::TableCatalog;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    logging::init_logging()?;

    // Load configuration
    let config = config::Config::new()?;

    // Build the catalog before binding the listener: an unreadable source
    // file must keep the process from ever reporting ready.
    let grids = services::grid_source::load_workbook(&config.sheet_path)?;
    let catalog = services::segmenter::build_catalog(grids);
    if catalog.is_empty() {
        tracing::warn!("No tables found in {}", config.sheet_path.display());
    }
    tracing::info!("Catalog ready with {} tables", catalog.len());

    // Build our application state
    let state = Arc::new(AppState::new(config, catalog));

    // Build our application with a route
    let app = Router::new()
        .merge(routes::routes())
        .merge(routes::tables::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    // Run it
    let addr = SocketAddr::from(([127, 0, 0, 1], state.config.port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// Application state: the catalog is an immutable snapshot shared by every
// request. A reload would replace the whole Arc, never mutate in place.
pub struct AppState {
    config: config::Config,
    catalog: TableCatalog,
}

impl AppState {
    fn new(config: config::Config, catalog: TableCatalog) -> Self {
        Self { config, catalog }
    }
}
