use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        purchase_order::{PurchaseOrderDto, PurchaseOrderFormDto},
    },
    server::{error::Error, model::app::AppState, service::purchase_order::PurchaseOrderService},
};

pub static PURCHASE_ORDER_TAG: &str = "purchase order";

/// List purchase orders, most recently received first
#[utoipa::path(
    get,
    path = "/api/purchase-orders",
    tag = PURCHASE_ORDER_TAG,
    responses(
        (status = 200, description = "Success when listing purchase orders", body = Vec<PurchaseOrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_purchase_orders(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let orders = PurchaseOrderService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(orders)))
}

/// Record a purchase order document already placed in the file store
#[utoipa::path(
    post,
    path = "/api/purchase-orders",
    tag = PURCHASE_ORDER_TAG,
    request_body = PurchaseOrderFormDto,
    responses(
        (status = 201, description = "Purchase order recorded", body = PurchaseOrderDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_purchase_order(
    State(state): State<AppState>,
    Json(form): Json<PurchaseOrderFormDto>,
) -> Result<impl IntoResponse, Error> {
    let order = PurchaseOrderService::new(&state.db)
        .create(&form.client_name, &form.file_path, form.received_at)
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Count a download of a purchase order document
///
/// Returns the record so the caller can fetch the document from its file path.
#[utoipa::path(
    post,
    path = "/api/purchase-orders/{id}/download",
    tag = PURCHASE_ORDER_TAG,
    params(("id" = i32, Path, description = "Purchase order ID")),
    responses(
        (status = 200, description = "Download recorded", body = PurchaseOrderDto),
        (status = 404, description = "Purchase order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_purchase_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let order = PurchaseOrderService::new(&state.db)
        .record_download(id)
        .await?;

    Ok((StatusCode::OK, Json(order)))
}

/// Delete a purchase order record
#[utoipa::path(
    delete,
    path = "/api/purchase-orders/{id}",
    tag = PURCHASE_ORDER_TAG,
    params(("id" = i32, Path, description = "Purchase order ID")),
    responses(
        (status = 204, description = "Purchase order deleted"),
        (status = 404, description = "Purchase order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_purchase_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PurchaseOrderService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
