use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::Role;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Login failed due to unknown email or wrong password")]
    InvalidCredentials,
    #[error("User ID {0:?} attempted to log in with a deactivated account")]
    AccountDisabled(i32),
    #[error("User ID {user_id:?} with role {role:?} is not permitted to access this resource")]
    AccessDenied { user_id: i32, role: Role },
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(message))).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                Self::unauthorized("Authentication required")
            }
            Self::InvalidCredentials | Self::AccountDisabled(_) => {
                tracing::debug!("{}", self);

                Self::unauthorized("Invalid email or password")
            }
            Self::AccessDenied { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        "You do not have permission to access this resource",
                    )),
                )
                    .into_response()
            }
        }
    }
}
