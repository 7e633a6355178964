use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        billing::{TaskRecordDto, TaskRecordEditDto},
    },
    server::{error::Error, model::app::AppState, service::task_record::TaskRecordService},
};

pub static TASK_RECORD_TAG: &str = "task record";

/// Edit a task record
///
/// Absent fields are left unchanged. The payable amount is recalculated from the
/// contractor's current pricing policy on every edit.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = TASK_RECORD_TAG,
    params(("id" = i32, Path, description = "Task record ID")),
    request_body = TaskRecordEditDto,
    responses(
        (status = 200, description = "Task record saved", body = TaskRecordDto),
        (status = 400, description = "Invalid hours or pricing policy", body = ErrorDto),
        (status = 404, description = "Task record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(edit): Json<TaskRecordEditDto>,
) -> Result<impl IntoResponse, Error> {
    let task = TaskRecordService::new(&state.db, &state.calculator)
        .update(id, edit)
        .await?;

    Ok((StatusCode::OK, Json(task)))
}

/// Recalculate a task record's payable amount
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/recalculate",
    tag = TASK_RECORD_TAG,
    params(("id" = i32, Path, description = "Task record ID")),
    responses(
        (status = 200, description = "Task record recalculated", body = TaskRecordDto),
        (status = 400, description = "Invalid pricing policy", body = ErrorDto),
        (status = 404, description = "Task record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recalculate_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let task = TaskRecordService::new(&state.db, &state.calculator)
        .recalculate(id)
        .await?;

    Ok((StatusCode::OK, Json(task)))
}
