//! `/users` handlers.

use std::sync::LazyLock;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use regex::Regex;
use serde_json::{json, Value};

use crate::db::{timestamp, Db};
use crate::error::AppError;
use crate::model::{CreateUser, Todo, UpdateUser, User};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if EMAIL.is_match(email) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Validation error: Invalid email format".to_string()))
    }
}

pub async fn list(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.read().await.users().to_vec())
}

pub async fn get(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, AppError> {
    let Path(id) = id?;
    let tables = db.read().await;
    tables.user(id).cloned().map(Json).ok_or(AppError::NotFound("User"))
}

pub async fn create(
    State(db): State<Db>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let Json(input) = payload?;
    validate_email(&input.email)?;
    let mut tables = db.write().await;
    if tables.user_by_email(&input.email).is_some() {
        return Err(AppError::BadRequest("Email already exists".to_string()));
    }
    let user = tables.insert_user(input);
    tracing::info!(id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    if let Some(email) = input.email.as_deref() {
        validate_email(email)?;
    }
    let mut tables = db.write().await;
    if tables.user(id).is_none() {
        return Err(AppError::NotFound("User"));
    }
    if let Some(email) = input.email.as_deref() {
        if tables.user_by_email(email).is_some_and(|u| u.id != id) {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }
    }
    let user = tables.user_mut(id).ok_or(AppError::NotFound("User"))?;
    if let Some(name) = input.name {
        user.name = name;
    }
    if let Some(email) = input.email {
        user.email = email;
    }
    user.updated_at = Some(timestamp());
    Ok(Json(user.clone()))
}

pub async fn delete(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = id?;
    if db.write().await.remove_user(id) {
        Ok(Json(json!({ "message": "User deleted successfully" })))
    } else {
        Err(AppError::NotFound("User"))
    }
}

pub async fn todos(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let Path(id) = id?;
    let tables = db.read().await;
    if tables.user(id).is_none() {
        return Err(AppError::NotFound("User"));
    }
    Ok(Json(
        tables.todos().iter().filter(|t| t.user_id == id).cloned().collect(),
    ))
}
