//! Domain DTOs for the taskboard API.
//!
//! # Design
//! These mirror the mock server's schema but are defined independently;
//! integration tests catch drift. Identity and timestamps are opaque values
//! assigned by the server and passed through untouched.

use serde::{Deserialize, Serialize};

pub type UserId = i64;
pub type TodoId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub user_id: UserId,
    pub created_at: String,
}

/// Request payload for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

/// Request payload for creating a todo. `completed` is left to the server
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    pub user_id: UserId,
}

/// Partial update payload. Omitted fields stay unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub message: String,
    pub version: String,
}
