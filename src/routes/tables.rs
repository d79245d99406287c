use axum::{
    extract::{Query, State},
    routing::get,
    Router,
    Json,
    http::Method,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use crate::{
    AppState,
    error::AppError,
    services::numeric,
};
use tower_http::cors::{CorsLayer, Any};

pub fn routes() -> Router<Arc<AppState>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/list_tables", get(list_tables))
        .route("/get_table_details", get(get_table_details))
        .route("/row_sum", get(row_sum))
        .layer(cors)
}

#[derive(Debug, Deserialize)]
pub struct TableDetailsQuery {
    table_name: String,
}

#[derive(Debug, Deserialize)]
pub struct RowSumQuery {
    table_name: String,
    row_name: String,
}

#[derive(Debug, Serialize)]
pub struct ListTablesResponse {
    tables: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TableDetailsResponse {
    table_name: String,
    row_names: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RowSumResponse {
    table_name: String,
    row_name: String,
    sum: f64,
}

#[axum::debug_handler]
async fn list_tables(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListTablesResponse>, AppError> {
    let tables = state.catalog.table_names();
    tracing::info!("Listing {} tables", tables.len());
    Ok(Json(ListTablesResponse { tables }))
}

#[axum::debug_handler]
async fn get_table_details(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableDetailsQuery>,
) -> Result<Json<TableDetailsResponse>, AppError> {
    if query.table_name.is_empty() {
        return Err(AppError::InvalidInput("table_name must not be empty".to_string()));
    }

    tracing::info!("Fetching row labels for table: {}", query.table_name);
    let row_names = state.catalog.row_labels(&query.table_name)?;

    Ok(Json(TableDetailsResponse {
        table_name: query.table_name,
        row_names,
    }))
}

#[axum::debug_handler]
async fn row_sum(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RowSumQuery>,
) -> Result<Json<RowSumResponse>, AppError> {
    if query.table_name.is_empty() || query.row_name.is_empty() {
        return Err(AppError::InvalidInput(
            "table_name and row_name must not be empty".to_string(),
        ));
    }

    tracing::info!(
        "Summing row '{}' of table '{}'",
        query.row_name,
        query.table_name
    );
    let row = state.catalog.row(&query.table_name, &query.row_name)?;
    let sum = numeric::sum_row(row);

    Ok(Json(RowSumResponse {
        table_name: query.table_name,
        row_name: query.row_name,
        sum,
    }))
}
