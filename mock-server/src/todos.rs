//! `/todos` handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::db::{timestamp, Db};
use crate::error::AppError;
use crate::model::{CreateTodo, Todo, TodoFilter, UpdateTodo};

/// `true`, `1` and `yes` (any case) mean completed; anything else does not.
pub fn parse_completed(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

pub async fn list(
    State(db): State<Db>,
    filter: Result<Query<TodoFilter>, QueryRejection>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let Query(filter) = filter?;
    let user_id = match filter.user_id.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            raw.parse::<i64>()
                .map_err(|_| AppError::BadRequest("Invalid user_id parameter".to_string()))?,
        ),
        None => None,
    };
    let completed = filter.completed.as_deref().map(parse_completed);

    let tables = db.read().await;
    let todos = tables
        .todos()
        .iter()
        .filter(|t| user_id.map_or(true, |id| t.user_id == id))
        .filter(|t| completed.map_or(true, |c| t.completed == c))
        .cloned()
        .collect();
    Ok(Json(todos))
}

pub async fn get(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, AppError> {
    let Path(id) = id?;
    let tables = db.read().await;
    tables.todo(id).cloned().map(Json).ok_or(AppError::NotFound("Todo"))
}

pub async fn create(
    State(db): State<Db>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Json(input) = payload?;
    let mut tables = db.write().await;
    if tables.user(input.user_id).is_none() {
        return Err(AppError::BadRequest("User not found".to_string()));
    }
    let todo = tables.insert_todo(input);
    tracing::info!(id = todo.id, user_id = todo.user_id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let mut tables = db.write().await;
    if tables.todo(id).is_none() {
        return Err(AppError::NotFound("Todo"));
    }
    if let Some(user_id) = input.user_id {
        if tables.user(user_id).is_none() {
            return Err(AppError::BadRequest("User not found".to_string()));
        }
    }
    let todo = tables.todo_mut(id).ok_or(AppError::NotFound("Todo"))?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(description) = input.description {
        todo.description = description;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    if let Some(user_id) = input.user_id {
        todo.user_id = user_id;
    }
    todo.updated_at = Some(timestamp());
    Ok(Json(todo.clone()))
}

pub async fn delete(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = id?;
    if db.write().await.remove_todo(id) {
        Ok(Json(json!({ "message": "Todo deleted successfully" })))
    } else {
        Err(AppError::NotFound("Todo"))
    }
}
