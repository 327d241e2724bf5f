//! Error types for the mortgage site
//!
//! All errors use thiserror for structured error handling.
//! They serialize to their display string and map onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::blocks::BuilderError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Unauthorized - Admin access required")]
    Unauthorized,

    #[error("Forbidden - Admin access required")]
    Forbidden,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Builder error: {0}")]
    Builder(#[from] BuilderError),

    #[error("{0}")]
    Generic(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Builder(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for failures the caller caused; their message is safe to echo.
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if self.is_client_error() {
            serde_json::json!({ "success": false, "error": self.to_string() })
        } else {
            tracing::error!("Request failed: {}", self);
            serde_json::json!({ "success": false, "error": "Internal server error" })
        };

        (status, Json(body)).into_response()
    }
}

impl AppError {
    /// Response for a failed write. Server-side failures carry a fixed
    /// `failure` message plus the raw detail so the operator knows the
    /// write did not take effect.
    pub fn write_failure(self, failure: &str) -> Response {
        if self.is_client_error() {
            return self.into_response();
        }

        tracing::error!("{}: {}", failure, self);
        let body = serde_json::json!({
            "success": false,
            "error": failure,
            "details": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
