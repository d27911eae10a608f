use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Malformed request input. Always raised before any database call is made.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid shift {0:?}, expected \"morning\" or \"night\"")]
    InvalidShift(String),
    #[error("Invalid batch status {0:?}, expected \"active\", \"completed\" or \"cancelled\"")]
    InvalidStatus(String),
    #[error("Invalid role {0:?}, expected \"owner\", \"manager\" or \"sales_rep\"")]
    InvalidRole(String),
    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Malformed query string: {0}")]
    MalformedQuery(String),
    #[error("Malformed path parameter: {0}")]
    MalformedPath(String),
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ValidationError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedQuery(rejection.body_text())
    }
}

impl From<PathRejection> for ValidationError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedPath(rejection.body_text())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto::with_details("Invalid request", self.to_string())),
        )
            .into_response()
    }
}
