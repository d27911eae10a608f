//! Error types for the bakeshift server.
//!
//! Domain specific errors (authentication, configuration, request validation) live in
//! their own modules and are aggregated into [`Error`]. Every error implements
//! `IntoResponse` so controllers can return `Result<impl IntoResponse, Error>` and have
//! failures rendered as the JSON error envelope.

pub mod auth;
pub mod config;
pub mod retry;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Main error type for the bakeshift server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables, shift boundaries)
/// - Authentication & authorization errors (401 / 403)
/// - Validation errors for malformed requests (400)
/// - Missing resources (404)
/// - External library errors (database, sessions, scheduler, password hashing), all 500
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Malformed or missing request input, detected before any database call.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Requested resource does not exist or is not visible to the caller.
    #[error("{0} not found")]
    NotFound(String),
    /// Internal error indicating a bug or an invariant the database failed to uphold.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Password hashing or verification error.
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
    /// I/O error (binding the listener, serving).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation errors
/// - 401 Unauthorized - Missing or stale session, bad credentials
/// - 403 Forbidden - Role not permitted for the resource
/// - 404 Not Found - Missing resources
/// - 500 Internal Server Error - Everything else (logged, generic message returned)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFound(resource) => {
                tracing::debug!("{} not found", resource);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto::new(format!("{} not found", resource))),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
