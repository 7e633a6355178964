use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        contractor::{ContractorDto, ContractorFormDto},
    },
    server::{error::Error, model::app::AppState, service::contractor::ContractorService},
};

pub static CONTRACTOR_TAG: &str = "contractor";

/// List all contractors ordered by name
#[utoipa::path(
    get,
    path = "/api/contractors",
    tag = CONTRACTOR_TAG,
    responses(
        (status = 200, description = "Success when listing contractors", body = Vec<ContractorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_contractors(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let contractors = ContractorService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(contractors)))
}

/// Create a contractor
#[utoipa::path(
    post,
    path = "/api/contractors",
    tag = CONTRACTOR_TAG,
    request_body = ContractorFormDto,
    responses(
        (status = 201, description = "Contractor created", body = ContractorDto),
        (status = 400, description = "Invalid pricing policy", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contractor(
    State(state): State<AppState>,
    Json(form): Json<ContractorFormDto>,
) -> Result<impl IntoResponse, Error> {
    let contractor = ContractorService::new(&state.db).create(form).await?;

    Ok((StatusCode::CREATED, Json(contractor)))
}

/// Get a contractor by ID
#[utoipa::path(
    get,
    path = "/api/contractors/{id}",
    tag = CONTRACTOR_TAG,
    params(("id" = i32, Path, description = "Contractor ID")),
    responses(
        (status = 200, description = "Success when retrieving contractor", body = ContractorDto),
        (status = 404, description = "Contractor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contractor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let contractor = ContractorService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(contractor)))
}

/// Replace a contractor
///
/// Saved task records keep their amounts until they are edited or recalculated.
#[utoipa::path(
    put,
    path = "/api/contractors/{id}",
    tag = CONTRACTOR_TAG,
    params(("id" = i32, Path, description = "Contractor ID")),
    request_body = ContractorFormDto,
    responses(
        (status = 200, description = "Contractor updated", body = ContractorDto),
        (status = 400, description = "Invalid pricing policy", body = ErrorDto),
        (status = 404, description = "Contractor not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contractor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(form): Json<ContractorFormDto>,
) -> Result<impl IntoResponse, Error> {
    let contractor = ContractorService::new(&state.db).update(id, form).await?;

    Ok((StatusCode::OK, Json(contractor)))
}

/// Delete a contractor along with its task records
#[utoipa::path(
    delete,
    path = "/api/contractors/{id}",
    tag = CONTRACTOR_TAG,
    params(("id" = i32, Path, description = "Contractor ID")),
    responses(
        (status = 204, description = "Contractor deleted"),
        (status = 404, description = "Contractor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contractor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ContractorService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
