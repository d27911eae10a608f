//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs` with the document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path with different methods are registered through one `routes!`
/// call so utoipa-axum merges them into a single method router.
///
/// # Returns
/// An Axum `Router<AppState>` ready for `with_state` and the session layer.
///
/// # Example
/// ```ignore
/// let app_state = AppState::new(db, config.shift_clock);
/// let router = routes().with_state(app_state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Bakeshift", description = "Bakeshift API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Login, logout and the current user"),
        (name = controller::user::USER_TAG, description = "Staff account management"),
        (name = controller::bread_type::BREAD_TYPE_TAG, description = "Bread types and prices"),
        (name = controller::batch::BATCH_TAG, description = "Production batches"),
        (name = controller::shift::SHIFT_TAG, description = "Shift selection and shift end"),
        (name = controller::sales::SALES_TAG, description = "Sales logging"),
        (name = controller::inventory::INVENTORY_TAG, description = "Remaining and available stock"),
        (name = controller::feedback::FEEDBACK_TAG, description = "Shift feedback notes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Supervisor dashboard"),
        (name = controller::activity::ACTIVITY_TAG, description = "Activity feed"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::user::create_user))
        .routes(routes!(
            controller::bread_type::list_bread_types,
            controller::bread_type::create_bread_type
        ))
        .routes(routes!(
            controller::batch::create_batch,
            controller::batch::list_batches
        ))
        .routes(routes!(
            controller::batch::update_batch,
            controller::batch::delete_batch
        ))
        .routes(routes!(controller::batch::generate_batch_number))
        .routes(routes!(controller::batch::get_batch_stats))
        .routes(routes!(controller::batch::verify_deletion))
        .routes(routes!(
            controller::shift::get_current_shift,
            controller::shift::select_shift
        ))
        .routes(routes!(controller::shift::end_shift))
        .routes(routes!(
            controller::sales::record_sale,
            controller::sales::list_sales
        ))
        .routes(routes!(controller::sales::get_sales_summary))
        .routes(routes!(controller::inventory::check_remaining_bread))
        .routes(routes!(
            controller::inventory::submit_remaining_bread,
            controller::inventory::list_remaining_bread
        ))
        .routes(routes!(controller::inventory::get_available_stock))
        .routes(routes!(
            controller::feedback::submit_feedback,
            controller::feedback::list_feedback
        ))
        .routes(routes!(controller::dashboard::get_staff_online))
        .routes(routes!(controller::activity::list_activities))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
