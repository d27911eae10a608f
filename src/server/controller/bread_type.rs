use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bread_type::{BreadTypeDto, CreateBreadTypeDto},
    },
    server::{
        controller::util::{
            access::{require_role, SUPERVISOR_ROLES},
            extract::ApiJson,
            get_user::get_user_from_session,
        },
        error::Error,
        model::app::AppState,
        service::bread_type::{validate_bread_type, BreadTypeService},
    },
};

pub static BREAD_TYPE_TAG: &str = "bread-types";

/// List active bread types by name
#[utoipa::path(
    get,
    path = "/api/bread-types",
    tag = BREAD_TYPE_TAG,
    responses(
        (status = 200, description = "Active bread types", body = Vec<BreadTypeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bread_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let bread_types: Vec<BreadTypeDto> = BreadTypeService::new(&state.db)
        .list_active()
        .await?
        .into_iter()
        .map(BreadTypeDto::from)
        .collect();

    Ok((StatusCode::OK, Json(bread_types)))
}

/// Add a bread type
#[utoipa::path(
    post,
    path = "/api/bread-types",
    tag = BREAD_TYPE_TAG,
    request_body = CreateBreadTypeDto,
    responses(
        (status = 201, description = "Bread type created", body = BreadTypeDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an owner or manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bread_type(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<CreateBreadTypeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    require_role(&user, &SUPERVISOR_ROLES)?;

    let (name, unit_price) = validate_bread_type(dto)?;
    let bread_type = BreadTypeService::new(&state.db)
        .create(&name, unit_price)
        .await?;

    Ok((StatusCode::CREATED, Json(BreadTypeDto::from(bread_type))))
}
