//! Unified service-layer error type
//!
//! `ServiceError` bridges the gap between DB-layer errors (`sqlx::Error`)
//! and the HTTP boundary. It enables `?` propagation without manual
//! `.map_err(|e| { tracing::error!(...); ... })` boilerplate: handlers
//! return `ServiceResult<T>` and axum renders the error via `IntoResponse`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Service-layer error
///
/// - `AlreadyExists` / `NotFound`: business-rule errors, mapped to 4xx
/// - `Validation`: request body failed boundary validation, mapped to 400
/// - `Db`: database/infrastructure errors (logged, mapped to 500 without
///   leaking the underlying message)
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Employee already exists with email: {0}")]
    AlreadyExists(String),

    #[error("Employee not found with id: {0}")]
    NotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error")]
    Db(#[from] sqlx::Error),
}

impl ServiceError {
    /// HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AlreadyExists(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Validation(e.to_string())
    }
}

/// Structured error body returned to clients
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub msg: String,
    pub status: u16,
    pub time: DateTime<Utc>,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let Self::Db(ref e) = self {
            tracing::error!(error = %e, "database error");
        }
        let status = self.status();
        let body = ErrorBody {
            msg: self.to_string(),
            status: status.as_u16(),
            time: Utc::now(),
        };
        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
