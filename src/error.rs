use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use serde_json::json;
use axum::Json;

#[derive(Debug)]
pub enum AppError {
    SourceUnavailable(String),
    TableNotFound(String),
    RowNotFound(String),
    InvalidInput(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::SourceUnavailable(msg) => write!(f, "Source unavailable: {}", msg),
            AppError::TableNotFound(name) => write!(f, "Table '{}' not found", name),
            AppError::RowNotFound(msg) => write!(f, "Row not found: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<calamine::Error> for AppError {
    fn from(err: calamine::Error) -> Self {
        AppError::SourceUnavailable(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::SourceUnavailable(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::TableNotFound(name) => {
                (StatusCode::NOT_FOUND, format!("Table '{}' not found", name))
            }
            AppError::RowNotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::IoError(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
