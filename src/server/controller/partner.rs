use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        billing::{QuoteDto, QuoteQuery},
        partner::{PartnerDto, PartnerFormDto},
    },
    server::{error::Error, model::app::AppState, service::partner::PartnerService},
};

pub static PARTNER_TAG: &str = "partner";

/// List partners, most recently created first
#[utoipa::path(
    get,
    path = "/api/partners",
    tag = PARTNER_TAG,
    responses(
        (status = 200, description = "Success when listing partners", body = Vec<PartnerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_partners(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let partners = PartnerService::new(&state.db, &state.calculator)
        .list()
        .await?;

    Ok((StatusCode::OK, Json(partners)))
}

/// Create a partner
#[utoipa::path(
    post,
    path = "/api/partners",
    tag = PARTNER_TAG,
    request_body = PartnerFormDto,
    responses(
        (status = 201, description = "Partner created", body = PartnerDto),
        (status = 400, description = "Invalid pricing policy", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_partner(
    State(state): State<AppState>,
    Json(form): Json<PartnerFormDto>,
) -> Result<impl IntoResponse, Error> {
    let partner = PartnerService::new(&state.db, &state.calculator)
        .create(form)
        .await?;

    Ok((StatusCode::CREATED, Json(partner)))
}

/// Get a partner by ID
#[utoipa::path(
    get,
    path = "/api/partners/{id}",
    tag = PARTNER_TAG,
    params(("id" = i32, Path, description = "Partner ID")),
    responses(
        (status = 200, description = "Success when retrieving partner", body = PartnerDto),
        (status = 404, description = "Partner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let partner = PartnerService::new(&state.db, &state.calculator)
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(partner)))
}

/// Replace a partner
#[utoipa::path(
    put,
    path = "/api/partners/{id}",
    tag = PARTNER_TAG,
    params(("id" = i32, Path, description = "Partner ID")),
    request_body = PartnerFormDto,
    responses(
        (status = 200, description = "Partner updated", body = PartnerDto),
        (status = 400, description = "Invalid pricing policy", body = ErrorDto),
        (status = 404, description = "Partner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(form): Json<PartnerFormDto>,
) -> Result<impl IntoResponse, Error> {
    let partner = PartnerService::new(&state.db, &state.calculator)
        .update(id, form)
        .await?;

    Ok((StatusCode::OK, Json(partner)))
}

/// Quote the payable amount for hours of work under a partner's pricing policy
#[utoipa::path(
    get,
    path = "/api/partners/{id}/quote",
    tag = PARTNER_TAG,
    params(("id" = i32, Path, description = "Partner ID"), QuoteQuery),
    responses(
        (status = 200, description = "Quoted amount", body = QuoteDto),
        (status = 400, description = "Invalid hours or pricing policy", body = ErrorDto),
        (status = 404, description = "Partner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn quote_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<QuoteQuery>,
) -> Result<impl IntoResponse, Error> {
    let quote = PartnerService::new(&state.db, &state.calculator)
        .quote(id, query.hours)
        .await?;

    Ok((StatusCode::OK, Json(quote)))
}
