use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Ошибки обработчиков, отдаются клиенту как JSON `{ "error": ... }`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Admin config not found: {0}")]
    ConfigNotFound(String),
    #[error("Cannot read admin config: {0}")]
    ConfigRead(#[from] std::io::Error),
    #[error("Invalid admin config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ConfigNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConfigRead(_) | AppError::ConfigParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!("{}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
