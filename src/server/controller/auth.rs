use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    server::{
        controller::util::{extract::ApiJson, get_user::get_user_from_session},
        error::Error,
        model::{
            app::AppState,
            session::{staff::SessionStaffSessionId, user::SessionUserId},
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in with email and password
///
/// Starts a session for the user and opens a staff session which counts them as online.
/// Does not require an existing session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Unknown email, wrong password or deactivated account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let result = AuthService::new(&state.db)
        .login(dto, &state.activity)
        .await?;

    // New session ID on login to avoid fixation
    session.cycle_id().await?;
    SessionUserId::insert(&session, result.user.id).await?;
    SessionStaffSessionId::insert(&session, result.staff_session_id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(result.user))))
}

/// Log out and end the staff session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    // Only clear session if there is actually a user in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Ok(StatusCode::NO_CONTENT);
    };

    let staff_session_id = SessionStaffSessionId::get(&session).await?;

    AuthService::new(&state.db)
        .logout(user_id, staff_session_id, &state.activity)
        .await?;

    session.clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
