use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::StaffOnlineDto},
    server::{
        controller::util::{
            access::{require_role, SUPERVISOR_ROLES},
            get_user::get_user_from_session,
        },
        error::Error,
        model::app::AppState,
        service::dashboard::DashboardService,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Number of staff currently online
#[utoipa::path(
    get,
    path = "/api/dashboard/staff-online",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Staff online", body = StaffOnlineDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an owner or manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff_online(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    require_role(&user, &SUPERVISOR_ROLES)?;

    let count = DashboardService::new(&state.db).staff_online().await?;

    Ok((StatusCode::OK, Json(StaffOnlineDto { count })))
}
