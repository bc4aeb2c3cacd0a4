//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::search::SearchError;
use crate::source::SourceError;
use crate::store::StoreError;

pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("{0}")]
    Search(#[from] SearchError),

    /// Blocking task panicked or was cancelled
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::Search(SearchError::Validation(_)) => StatusCode::BAD_REQUEST,
            RestError::Search(SearchError::Source(e)) => match e {
                SourceError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                SourceError::Io { .. }
                | SourceError::Remote(_)
                | SourceError::MalformedRow { .. }
                | SourceError::Empty(_)
                | SourceError::Csv(_) => StatusCode::BAD_GATEWAY,
            },
            RestError::Search(SearchError::Store(StoreError::LockPoisoned)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error code for the body
    pub fn kind(&self) -> &'static str {
        match self {
            RestError::Search(e) => e.code(),
            RestError::Internal(_) => "RETAIL_INTERNAL_ERROR",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            kind: err.kind(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
