use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use crate::AppState;

pub mod tables;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Spreadsheet Table Query API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/list_tables",
            "/get_table_details",
            "/row_sum"
        ]
    }))
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "table_count": state.catalog.len()
    }))
}
