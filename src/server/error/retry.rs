use sea_orm::{DbErr, SqlErr};

use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Run the operation again after a backoff
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection errors - transient, should retry
                DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Another writer took the value we computed, the operation recomputes it on retry
                err if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    ErrorRetryStrategy::Retry
                }

                // Query, type conversion and missing record errors won't resolve with retry
                _ => ErrorRetryStrategy::Fail,
            },

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) | Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            Self::ConfigError(_)
            | Self::AuthError(_)
            | Self::ValidationError(_)
            | Self::NotFound(_)
            | Self::InternalError(_)
            | Self::SchedulerError(_)
            | Self::PasswordHashError(_)
            | Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
