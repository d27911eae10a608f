use axum::{extract::State, http::StatusCode, response::{IntoResponse, Response}, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ShiftQuery},
        inventory::{
            AvailableStockDto, ConflictReportDto, RemainingBreadDto, RemainingBreadQuery,
            RemainingBreadRequestDto,
        },
    },
    server::{
        controller::util::{
            access::shift_or_session,
            extract::{ApiJson, ApiQuery},
            get_user::get_user_from_session,
        },
        error::Error,
        model::{app::AppState, session::shift::SessionShift},
        service::inventory::{InventoryService, RemainingSubmission, SubmitOutcome},
        util::validate::{parse_date, parse_shift},
    },
};

pub static INVENTORY_TAG: &str = "inventory";

/// Check remaining stock counts for likely duplicates without saving them
///
/// A count conflicts when its bread type and shift have no count yet today but an earlier
/// day holds exactly the same quantity, which usually means a stale form was sent again.
#[utoipa::path(
    post,
    path = "/api/remaining-bread/check",
    tag = INVENTORY_TAG,
    request_body = RemainingBreadRequestDto,
    responses(
        (status = 200, description = "Conflict report", body = ConflictReportDto),
        (status = 400, description = "Missing or invalid items", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_remaining_bread(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<RemainingBreadRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let submission =
        RemainingSubmission::from_dto(dto, SessionShift::get(&session).await?, user.id)?;
    let report = InventoryService::new(&state.db, &state.shift_clock)
        .check(&submission, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(report)))
}

/// Save remaining stock counts for today
///
/// When the counts conflict with earlier ones and `confirmed` is false nothing is saved and
/// the conflict report is returned with 409. Resubmit with `confirmed` set to save anyway.
/// A count already recorded today for the same bread type and shift is overwritten.
#[utoipa::path(
    post,
    path = "/api/remaining-bread",
    tag = INVENTORY_TAG,
    request_body = RemainingBreadRequestDto,
    responses(
        (status = 201, description = "Counts saved", body = Vec<RemainingBreadDto>),
        (status = 400, description = "Missing or invalid items", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Bread type not found", body = ErrorDto),
        (status = 409, description = "Conflicts need confirmation", body = ConflictReportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_remaining_bread(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<RemainingBreadRequestDto>,
) -> Result<Response, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let submission =
        RemainingSubmission::from_dto(dto, SessionShift::get(&session).await?, user.id)?;
    let outcome = InventoryService::new(&state.db, &state.shift_clock)
        .submit(&user, submission, Utc::now(), &state.activity)
        .await?;

    let response = match outcome {
        SubmitOutcome::NeedsConfirmation(report) => {
            (StatusCode::CONFLICT, Json(report)).into_response()
        }
        SubmitOutcome::Saved(records) => {
            let records: Vec<RemainingBreadDto> =
                records.into_iter().map(RemainingBreadDto::from).collect();

            (StatusCode::CREATED, Json(records)).into_response()
        }
    };

    Ok(response)
}

/// List remaining stock counts recorded for a local date
#[utoipa::path(
    get,
    path = "/api/remaining-bread",
    tag = INVENTORY_TAG,
    params(RemainingBreadQuery),
    responses(
        (status = 200, description = "Remaining stock counts", body = Vec<RemainingBreadDto>),
        (status = 400, description = "Invalid shift or date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_remaining_bread(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(query): ApiQuery<RemainingBreadQuery>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let shift = parse_shift(query.shift.as_deref())?;
    let date = parse_date(query.date.as_deref())?;

    let records: Vec<RemainingBreadDto> = InventoryService::new(&state.db, &state.shift_clock)
        .list(date, shift, Utc::now())
        .await?
        .into_iter()
        .map(RemainingBreadDto::from)
        .collect();

    Ok((StatusCode::OK, Json(records)))
}

/// Available stock per bread type for the latest occurrence of a shift
///
/// Produced by non-cancelled batches minus sold, never below zero.
#[utoipa::path(
    get,
    path = "/api/inventory/available",
    tag = INVENTORY_TAG,
    params(ShiftQuery),
    responses(
        (status = 200, description = "Available stock", body = AvailableStockDto),
        (status = 400, description = "Invalid shift", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_stock(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(query): ApiQuery<ShiftQuery>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let shift = shift_or_session(query.shift.as_deref(), &session).await?;
    let stock = InventoryService::new(&state.db, &state.shift_clock)
        .available(shift, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(stock)))
}
