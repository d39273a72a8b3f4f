//! In-memory REST API for users and todos.
//!
//! Every route is mounted twice: under `/api` and under `/api/python`, the
//! prefix the UI calls. The second mount stands in for the development
//! rewrite that forwards `/api/python/*` to the backend's `/api/*`.

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod todos;
pub mod users;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::ServerConfig;
pub use db::{Db, Tables};
pub use error::AppError;
pub use model::{CreateTodo, CreateUser, Todo, UpdateTodo, UpdateUser, User};

pub const VERSION: &str = "1.0.0";

fn routes() -> Router<Db> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/users", get(users::list).post(users::create))
        .route("/users/{id}", get(users::get).put(users::update).delete(users::delete))
        .route("/users/{id}/todos", get(users::todos))
        .route("/todos", get(todos::list).post(todos::create))
        .route("/todos/{id}", get(todos::get).put(todos::update).delete(todos::delete))
}

/// Router over empty tables.
pub fn app() -> Router {
    app_with(Tables::default())
}

pub fn app_with(tables: Tables) -> Router {
    let db: Db = Arc::new(RwLock::new(tables));
    let api = routes();
    Router::new()
        .nest("/api/python", api.clone())
        .nest("/api", api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}

pub async fn serve(listener: TcpListener, tables: Tables) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(tables)).await
}

async fn not_found() -> AppError {
    AppError::NotFound("Route")
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the taskboard API",
        "endpoints": {
            "health": "/api/health",
            "users": "/api/users",
            "todos": "/api/todos"
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "API is running",
        "version": VERSION
    }))
}
