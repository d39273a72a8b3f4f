//! Stateless HTTP request builder and response parser for the taskboard API.
//!
//! # Design
//! `ApiClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes the host's `Exchange`. Neither side touches the network or
//! any local collection.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{extract_detail, ApiError};
use crate::http::{Exchange, HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, CreateUser, Health, Todo, TodoId, UpdateTodo, User};

/// Fixed prefix of every route the UI calls. Deployment decides where it
/// is forwarded; the client never sees the difference.
pub const API_PREFIX: &str = "/api/python";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}{API_PREFIX}{route}", self.base_url)
    }

    fn get(&self, route: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(route),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        route: &str,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.url(route),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    // --- users ---

    pub fn build_list_users(&self) -> HttpRequest {
        self.get("/users")
    }

    pub fn build_create_user(&self, input: &CreateUser) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/users", input)
    }

    pub fn parse_list_users(&self, exchange: Exchange) -> Result<Vec<User>, ApiError> {
        decode(exchange, &[200])
    }

    pub fn parse_create_user(&self, exchange: Exchange) -> Result<User, ApiError> {
        decode(exchange, &[201, 200])
    }

    // --- todos ---

    pub fn build_list_todos(&self) -> HttpRequest {
        self.get("/todos")
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/todos", input)
    }

    pub fn build_update_todo(&self, id: TodoId, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, &format!("/todos/{id}"), input)
    }

    pub fn parse_list_todos(&self, exchange: Exchange) -> Result<Vec<Todo>, ApiError> {
        decode(exchange, &[200])
    }

    pub fn parse_create_todo(&self, exchange: Exchange) -> Result<Todo, ApiError> {
        decode(exchange, &[201, 200])
    }

    pub fn parse_update_todo(&self, exchange: Exchange) -> Result<Todo, ApiError> {
        decode(exchange, &[200])
    }

    // --- service ---

    pub fn build_health(&self) -> HttpRequest {
        self.get("/health")
    }

    pub fn parse_health(&self, exchange: Exchange) -> Result<Health, ApiError> {
        decode(exchange, &[200])
    }
}

fn decode<T: DeserializeOwned>(exchange: Exchange, expected: &[u16]) -> Result<T, ApiError> {
    let response = exchange?;
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map unexpected status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    let detail = extract_detail(&response.body);
    if response.status == 404 {
        return Err(ApiError::NotFound { detail });
    }
    Err(ApiError::Request {
        status: response.status,
        detail,
    })
}
