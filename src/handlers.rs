//! Todo CRUD handlers: list, create, update, delete, toggle.

use crate::error::AppError;
use crate::model::{CreateTodo, UpdateTodo};
use crate::service::TodoService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let todos = TodoService::list_all(&state.pool).await?;
    Ok(Json(todos))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTodo>,
) -> Result<impl IntoResponse, AppError> {
    let title = match body.title.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AppError::Validation("Le titre est requis")),
    };
    let todo = TodoService::create(&state.pool, title).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateTodo>,
) -> Result<impl IntoResponse, AppError> {
    let todo = TodoService::update(&state.pool, id, &body.title, body.completed)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TodoService::delete(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(serde_json::json!({
        "message": "Tâche supprimée avec succès"
    })))
}

pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let todo = TodoService::toggle_completed(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}
