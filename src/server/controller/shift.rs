use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        shift::{CurrentShiftDto, EndShiftDto, EndShiftResultDto, SelectShiftDto},
    },
    server::{
        controller::util::{
            access::shift_or_session, extract::ApiJson, get_user::get_user_from_session,
        },
        error::Error,
        model::{app::AppState, session::shift::SessionShift},
        service::shift::{current_shift, ShiftService},
        util::validate::require_shift,
    },
};

pub static SHIFT_TAG: &str = "shifts";

/// Get the session's selected shift and the shift the bakery clock is in
#[utoipa::path(
    get,
    path = "/api/shifts/current",
    tag = SHIFT_TAG,
    responses(
        (status = 200, description = "Current shift", body = CurrentShiftDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_shift(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let selected = SessionShift::get(&session).await?;

    Ok((
        StatusCode::OK,
        Json(current_shift(selected, &state.shift_clock, Utc::now())),
    ))
}

/// Select the shift used when requests omit one
#[utoipa::path(
    put,
    path = "/api/shifts/current",
    tag = SHIFT_TAG,
    request_body = SelectShiftDto,
    responses(
        (status = 200, description = "Shift selected", body = CurrentShiftDto),
        (status = 400, description = "Missing or invalid shift", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn select_shift(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<SelectShiftDto>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let shift = require_shift(dto.shift.as_deref())?;
    SessionShift::insert(&session, shift).await?;

    Ok((
        StatusCode::OK,
        Json(current_shift(shift, &state.shift_clock, Utc::now())),
    ))
}

/// End a shift, deleting the caller's batches and sales logged for it
#[utoipa::path(
    post,
    path = "/api/shifts/end",
    tag = SHIFT_TAG,
    request_body = EndShiftDto,
    responses(
        (status = 200, description = "Shift ended", body = EndShiftResultDto),
        (status = 400, description = "Invalid shift", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn end_shift(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<EndShiftDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let shift = shift_or_session(dto.shift.as_deref(), &session).await?;
    let result = ShiftService::new(&state.db)
        .end_shift(&user, shift, &state.activity)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
