//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected
/// into a unified OpenAPI document served at `/api/docs/openapi.json`. Swagger UI is
/// served at `/api/docs`.
///
/// # Registered Endpoints
/// - `GET|POST /api/contractors`, `GET|PUT|DELETE /api/contractors/{id}` - Contractor registry
/// - `GET|POST /api/cycles` - List billing cycles, initialize a month's cycle
/// - `GET /api/cycles/{id}` - Billing cycle with its task records
/// - `PUT /api/cycles/{id}/completed` - Set the completion flag
/// - `PUT /api/tasks/{id}`, `POST /api/tasks/{id}/recalculate` - Task record edits
/// - `GET|POST /api/partners`, `GET|PUT /api/partners/{id}` - Partner registry
/// - `GET /api/partners/{id}/quote` - Quote an amount under a partner's policy
/// - `GET|POST /api/purchase-orders`, `DELETE /api/purchase-orders/{id}`,
///   `POST /api/purchase-orders/{id}/download` - Purchase order ledger
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be given its state.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, &config));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Tally", description = "Tally contractor billing API"), tags(
        (name = controller::contractor::CONTRACTOR_TAG, description = "Contractor registry"),
        (name = controller::billing_cycle::BILLING_CYCLE_TAG, description = "Monthly billing cycles"),
        (name = controller::task_record::TASK_RECORD_TAG, description = "Task records and payable amounts"),
        (name = controller::partner::PARTNER_TAG, description = "Partner registry and quotes"),
        (name = controller::purchase_order::PURCHASE_ORDER_TAG, description = "Purchase order ledger"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::contractor::list_contractors,
            controller::contractor::create_contractor
        ))
        .routes(routes!(
            controller::contractor::get_contractor,
            controller::contractor::update_contractor,
            controller::contractor::delete_contractor
        ))
        .routes(routes!(
            controller::billing_cycle::list_cycles,
            controller::billing_cycle::initialize_cycle
        ))
        .routes(routes!(controller::billing_cycle::get_cycle))
        .routes(routes!(controller::billing_cycle::set_cycle_completed))
        .routes(routes!(controller::task_record::update_task))
        .routes(routes!(controller::task_record::recalculate_task))
        .routes(routes!(
            controller::partner::list_partners,
            controller::partner::create_partner
        ))
        .routes(routes!(
            controller::partner::get_partner,
            controller::partner::update_partner
        ))
        .routes(routes!(controller::partner::quote_partner))
        .routes(routes!(
            controller::purchase_order::list_purchase_orders,
            controller::purchase_order::create_purchase_order
        ))
        .routes(routes!(controller::purchase_order::delete_purchase_order))
        .routes(routes!(controller::purchase_order::download_purchase_order))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
