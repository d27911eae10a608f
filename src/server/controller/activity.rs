use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{activity::ActivityDto, api::ErrorDto},
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::activity::ActivityService,
    },
};

pub static ACTIVITY_TAG: &str = "activities";

/// Recent activity, newest first
///
/// Covers the last 3 days. Managers only see their own activity.
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Activity feed", body = Vec<ActivityDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_activities(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let activities: Vec<ActivityDto> = ActivityService::new(&state.db)
        .list_for(&user)
        .await?
        .into_iter()
        .map(ActivityDto::from)
        .collect();

    Ok((StatusCode::OK, Json(activities)))
}
