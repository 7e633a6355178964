use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        billing::{BillingCycleDetailDto, BillingCycleDto, CycleCompletionDto, InitializeCycleDto},
    },
    server::{
        error::Error, model::app::AppState, service::billing_cycle::BillingCycleService,
        util::time::parse_year_month,
    },
};

pub static BILLING_CYCLE_TAG: &str = "billing cycle";

/// List billing cycles, newest month first
#[utoipa::path(
    get,
    path = "/api/cycles",
    tag = BILLING_CYCLE_TAG,
    responses(
        (status = 200, description = "Success when listing billing cycles", body = Vec<BillingCycleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cycles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let cycles = BillingCycleService::new(&state.db, &state.calculator)
        .list()
        .await?;

    Ok((StatusCode::OK, Json(cycles)))
}

/// Initialize the billing cycle of a month
///
/// Creates the cycle and a task record for every contractor that does not have one
/// yet. Omitting the month, or sending no body at all, initializes the current month.
/// Safe to call repeatedly.
#[utoipa::path(
    post,
    path = "/api/cycles",
    tag = BILLING_CYCLE_TAG,
    request_body(content = Option<InitializeCycleDto>, description = "Month to initialize, may be omitted"),
    responses(
        (status = 200, description = "Billing cycle initialized", body = BillingCycleDto),
        (status = 400, description = "Invalid month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn initialize_cycle(
    State(state): State<AppState>,
    body: Option<Json<InitializeCycleDto>>,
) -> Result<impl IntoResponse, Error> {
    let cycle_service = BillingCycleService::new(&state.db, &state.calculator);

    let cycle = match body.and_then(|Json(body)| body.month) {
        Some(month) => {
            cycle_service
                .initialize_cycle(parse_year_month(&month)?)
                .await?
        }
        None => cycle_service.initialize_current_cycle(Utc::now()).await?,
    };

    Ok((StatusCode::OK, Json(cycle)))
}

/// Get a billing cycle with its task records
#[utoipa::path(
    get,
    path = "/api/cycles/{id}",
    tag = BILLING_CYCLE_TAG,
    params(("id" = i32, Path, description = "Billing cycle ID")),
    responses(
        (status = 200, description = "Success when retrieving billing cycle", body = BillingCycleDetailDto),
        (status = 404, description = "Billing cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cycle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let cycle = BillingCycleService::new(&state.db, &state.calculator)
        .get_cycle_detail(id)
        .await?;

    Ok((StatusCode::OK, Json(cycle)))
}

/// Mark a billing cycle as completed or reopen it
#[utoipa::path(
    put,
    path = "/api/cycles/{id}/completed",
    tag = BILLING_CYCLE_TAG,
    params(("id" = i32, Path, description = "Billing cycle ID")),
    request_body = CycleCompletionDto,
    responses(
        (status = 200, description = "Completion flag updated", body = BillingCycleDto),
        (status = 404, description = "Billing cycle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_cycle_completed(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<CycleCompletionDto>,
) -> Result<impl IntoResponse, Error> {
    let cycle = BillingCycleService::new(&state.db, &state.calculator)
        .set_completed(id, body.is_completed)
        .await?;

    Ok((StatusCode::OK, Json(cycle)))
}
