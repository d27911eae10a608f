use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ShiftQuery},
        batch::{
            BatchDto, BatchNumberDto, BatchQuery, BatchStatsDto, CreateBatchDto, UpdateBatchDto,
            VerifyDeletionDto, VerifyDeletionQuery,
        },
    },
    server::{
        controller::util::{
            access::{require_role, shift_or_session, SUPERVISOR_ROLES},
            extract::{ApiJson, ApiPath, ApiQuery},
            get_user::get_user_from_session,
        },
        error::Error,
        model::app::AppState,
        service::batch::{validate_batch_changes, validate_new_batch, BatchService},
        util::validate::{parse_shift, parse_status},
    },
};

pub static BATCH_TAG: &str = "batches";

/// Record a production batch
///
/// The batch number is assigned on creation as the next free number for the bread type and
/// shift, so two concurrent requests never receive the same number.
#[utoipa::path(
    post,
    path = "/api/batches",
    tag = BATCH_TAG,
    request_body = CreateBatchDto,
    responses(
        (status = 201, description = "Batch created", body = BatchDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Bread type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_batch(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<CreateBatchDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let new_batch = validate_new_batch(dto, user.id, &state.shift_clock, Utc::now())?;
    let batch = BatchService::new(&state.db)
        .create(&user, new_batch, &state.activity)
        .await?;

    Ok((StatusCode::CREATED, Json(BatchDto::from(batch))))
}

/// List the caller's batches, newest first
#[utoipa::path(
    get,
    path = "/api/batches",
    tag = BATCH_TAG,
    params(BatchQuery),
    responses(
        (status = 200, description = "Caller's batches", body = Vec<BatchDto>),
        (status = 400, description = "Invalid status or shift", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_batches(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(query): ApiQuery<BatchQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let status = parse_status(query.status.as_deref())?;
    let shift = parse_shift(query.shift.as_deref())?;

    let batches: Vec<BatchDto> = BatchService::new(&state.db)
        .list(user.id, status, shift)
        .await?
        .into_iter()
        .map(BatchDto::from)
        .collect();

    Ok((StatusCode::OK, Json(batches)))
}

/// Update one of the caller's batches
///
/// Absent fields are left unchanged. Moving a batch out of `active` stamps its end time.
#[utoipa::path(
    put,
    path = "/api/batches/{batch_id}",
    tag = BATCH_TAG,
    params(("batch_id" = i32, Path, description = "ID of the batch")),
    request_body = UpdateBatchDto,
    responses(
        (status = 200, description = "Batch updated", body = BatchDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Batch not found among the caller's batches", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_batch(
    State(state): State<AppState>,
    session: Session,
    ApiPath(batch_id): ApiPath<i32>,
    ApiJson(dto): ApiJson<UpdateBatchDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let changes = validate_batch_changes(dto)?;
    let batch = BatchService::new(&state.db)
        .update(&user, batch_id, changes, &state.activity)
        .await?;

    Ok((StatusCode::OK, Json(BatchDto::from(batch))))
}

/// Delete one of the caller's batches
#[utoipa::path(
    delete,
    path = "/api/batches/{batch_id}",
    tag = BATCH_TAG,
    params(("batch_id" = i32, Path, description = "ID of the batch")),
    responses(
        (status = 204, description = "Batch deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Batch not found among the caller's batches", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_batch(
    State(state): State<AppState>,
    session: Session,
    ApiPath(batch_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    BatchService::new(&state.db)
        .delete(&user, batch_id, &state.activity)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Preview the next batch number for a bread type
///
/// Advisory only; the number is assigned for real when the batch is created.
#[utoipa::path(
    get,
    path = "/api/batches/generate-number/{bread_type_id}",
    tag = BATCH_TAG,
    params(
        ("bread_type_id" = i32, Path, description = "ID of the bread type"),
        ShiftQuery
    ),
    responses(
        (status = 200, description = "Next batch number", body = BatchNumberDto),
        (status = 400, description = "Invalid shift", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_batch_number(
    State(state): State<AppState>,
    session: Session,
    ApiPath(bread_type_id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<ShiftQuery>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let shift = shift_or_session(query.shift.as_deref(), &session).await?;
    let batch_number = BatchService::new(&state.db)
        .next_number(bread_type_id, shift)
        .await?;

    Ok((StatusCode::OK, Json(BatchNumberDto { batch_number })))
}

/// Batch statistics
///
/// Owners and managers get figures over every batch, sales reps over their own. Without a
/// shift all shifts are included.
#[utoipa::path(
    get,
    path = "/api/batches/stats",
    tag = BATCH_TAG,
    params(ShiftQuery),
    responses(
        (status = 200, description = "Batch statistics", body = BatchStatsDto),
        (status = 400, description = "Invalid shift", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_batch_stats(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(query): ApiQuery<ShiftQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let shift = parse_shift(query.shift.as_deref())?;
    let stats = BatchService::new(&state.db)
        .stats(&user, shift, &state.shift_clock, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(BatchStatsDto::from(stats))))
}

/// Verify that a user's batches of a shift are gone
///
/// Checking another user requires the owner or manager role.
#[utoipa::path(
    get,
    path = "/api/batches/verify-deletion",
    tag = BATCH_TAG,
    params(VerifyDeletionQuery),
    responses(
        (status = 200, description = "Verification result", body = VerifyDeletionDto),
        (status = 400, description = "Invalid shift", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Sales rep checking another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_deletion(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(query): ApiQuery<VerifyDeletionQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let shift = shift_or_session(query.shift.as_deref(), &session).await?;
    let user_id = query.user_id.unwrap_or(user.id);
    if user_id != user.id {
        require_role(&user, &SUPERVISOR_ROLES)?;
    }

    let result = BatchService::new(&state.db)
        .verify_deletion(user_id, shift)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
