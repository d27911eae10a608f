use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        feedback::{CreateFeedbackDto, FeedbackQuery, ShiftFeedbackDto},
    },
    server::{
        controller::util::{
            extract::{ApiJson, ApiQuery},
            get_user::get_user_from_session,
        },
        error::Error,
        model::{app::AppState, session::shift::SessionShift},
        service::feedback::{feedback_filter, validate_feedback, FeedbackService},
    },
};

pub static FEEDBACK_TAG: &str = "shift-feedback";

/// Leave a note about a shift
#[utoipa::path(
    post,
    path = "/api/shift-feedback",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback stored", body = ShiftFeedbackDto),
        (status = 400, description = "Missing note or invalid shift", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<CreateFeedbackDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let (shift, note) = validate_feedback(dto, SessionShift::get(&session).await?)?;
    let feedback = FeedbackService::new(&state.db)
        .submit(&user, shift, &note, &state.activity)
        .await?;

    Ok((StatusCode::CREATED, Json(ShiftFeedbackDto::from(feedback))))
}

/// List shift feedback, newest first
///
/// Sales reps only see their own notes; owners and managers see everyone's and may filter
/// by user.
#[utoipa::path(
    get,
    path = "/api/shift-feedback",
    tag = FEEDBACK_TAG,
    params(FeedbackQuery),
    responses(
        (status = 200, description = "Feedback", body = Vec<ShiftFeedbackDto>),
        (status = 400, description = "Invalid shift or date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Sales rep reading another user's feedback", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_feedback(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(query): ApiQuery<FeedbackQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let filter = feedback_filter(&user, query, &state.shift_clock)?;
    let feedback: Vec<ShiftFeedbackDto> = FeedbackService::new(&state.db)
        .list(&filter)
        .await?
        .into_iter()
        .map(ShiftFeedbackDto::from)
        .collect();

    Ok((StatusCode::OK, Json(feedback)))
}
