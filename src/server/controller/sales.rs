use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ShiftQuery},
        sales::{CreateSaleDto, SalesLogDto, SalesSummaryDto},
    },
    server::{
        controller::util::{
            access::shift_or_session,
            extract::{ApiJson, ApiQuery},
            get_user::get_user_from_session,
        },
        error::Error,
        model::{app::AppState, session::shift::SessionShift},
        service::sales::{SaleInput, SalesService},
        util::validate::parse_shift,
    },
};

pub static SALES_TAG: &str = "sales";

/// Record a sale
///
/// The unit price defaults to the bread type's current price and the shift to the
/// session's selected shift.
#[utoipa::path(
    post,
    path = "/api/sales",
    tag = SALES_TAG,
    request_body = CreateSaleDto,
    responses(
        (status = 201, description = "Sale recorded", body = SalesLogDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Bread type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_sale(
    State(state): State<AppState>,
    session: Session,
    ApiJson(dto): ApiJson<CreateSaleDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let input = SaleInput::from_dto(dto, SessionShift::get(&session).await?)?;
    let sale = SalesService::new(&state.db)
        .record(&user, input, &state.activity)
        .await?;

    Ok((StatusCode::CREATED, Json(SalesLogDto::from(sale))))
}

/// List the caller's sales, newest first
#[utoipa::path(
    get,
    path = "/api/sales",
    tag = SALES_TAG,
    params(ShiftQuery),
    responses(
        (status = 200, description = "Caller's sales", body = Vec<SalesLogDto>),
        (status = 400, description = "Invalid shift", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sales(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(query): ApiQuery<ShiftQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let shift = parse_shift(query.shift.as_deref())?;
    let sales: Vec<SalesLogDto> = SalesService::new(&state.db)
        .list(user.id, shift)
        .await?
        .into_iter()
        .map(SalesLogDto::from)
        .collect();

    Ok((StatusCode::OK, Json(sales)))
}

/// Sales totals for the latest occurrence of a shift
///
/// Owners and managers get the whole bakery's totals, sales reps their own.
#[utoipa::path(
    get,
    path = "/api/sales/summary",
    tag = SALES_TAG,
    params(ShiftQuery),
    responses(
        (status = 200, description = "Sales totals", body = SalesSummaryDto),
        (status = 400, description = "Invalid shift", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sales_summary(
    State(state): State<AppState>,
    session: Session,
    ApiQuery(query): ApiQuery<ShiftQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let shift = shift_or_session(query.shift.as_deref(), &session).await?;
    let summary = SalesService::new(&state.db)
        .summary(&user, shift, &state.shift_clock, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(SalesSummaryDto::from(summary))))
}
