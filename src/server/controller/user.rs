use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::sea_orm_active_enums::Role;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::util::{
            access::require_role, extract::ApiJson, get_user::get_user_from_session,
        },
        error::Error,
        model::app::AppState,
        service::user::{NewUser, UserService},
    },
};

pub static USER_TAG: &str = "users";

/// Create a staff account
///
/// Only owners may create accounts.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid input or email already in use", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_user_from_session(&state, &session).await?;
    require_role(&caller, &[Role::Owner])?;

    let new_user = NewUser::from_dto(dto)?;
    let user = UserService::new(&state.db).create_user(new_user).await?;

    tracing::info!("Owner ID {} created account ID {}", caller.id, user.id);

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}
