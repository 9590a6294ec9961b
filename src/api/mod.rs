use axum::routing::{get, post};
use axum::{Json, Router, extract::State, http::StatusCode};

use crate::db::repository;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;
use crate::validation;

/// One POST route per procedure, mirroring the names the client calls.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rpc/createTask", post(create_task))
        .route("/rpc/getTask", post(get_task))
        .route("/rpc/getTasks", post(get_tasks))
        .route("/rpc/updateTask", post(update_task))
        .route("/rpc/deleteTask", post(delete_task))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    validation::validate_create(&req)?;
    let task = repository::insert_task(&state.db, req).await?;
    Ok(Json(task))
}

/// A missing id is a normal negative result, answered with `null`.
async fn get_task(
    State(state): State<AppState>,
    Json(req): Json<TaskIdRequest>,
) -> Result<Json<Option<Task>>, AppError> {
    let task = repository::find_task_by_id(&state.db, req.id).await?;
    Ok(Json(task))
}

async fn get_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = repository::fetch_tasks(&state.db).await?;
    Ok(Json(tasks))
}

async fn update_task(
    State(state): State<AppState>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    validation::validate_update(&req)?;
    let task = repository::update_task(&state.db, req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(task))
}

/// Unlike updateTask, deleting a missing id is not an error; the caller
/// gets `success: false`.
async fn delete_task(
    State(state): State<AppState>,
    Json(req): Json<TaskIdRequest>,
) -> Result<Json<DeleteTaskResponse>, AppError> {
    let success = repository::delete_task(&state.db, req.id).await?;
    Ok(Json(DeleteTaskResponse { success }))
}
