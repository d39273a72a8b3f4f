//! Client-side synchronization core for the taskboard UI.
//!
//! # Overview
//! Builds `HttpRequest` values and consumes host-executed exchanges without
//! touching the network (host-does-IO pattern). On top of the API client
//! sit the view state a page needs: the entity collections, the page shell
//! with its paired initial fetch, and the user and todo panels.
//!
//! # Design
//! - `ApiClient` is stateless; it holds only `base_url`.
//! - Every operation is split into `build_*` / `parse_*` (client) or
//!   `submit` / `finish_submit`, `begin_toggle` / `finish_toggle` (panels),
//!   so each network suspension point is explicit.
//! - Collections are only ever replaced, never edited in place.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod shell;
pub mod store;
pub mod todo_panel;
pub mod types;
pub mod user_panel;

pub use client::{ApiClient, API_PREFIX};
pub use error::{ApiError, TransportError};
pub use form::{FormStatus, Phase, FILL_ALL_FIELDS};
pub use http::{Exchange, HttpMethod, HttpRequest, HttpResponse};
pub use shell::{LoadRequests, MergeSink, PageShell, LOAD_FAILED};
pub use store::{EntityStore, UNKNOWN_USER};
pub use todo_panel::{toggle_label, PendingToggle, TodoPanel, CREATE_TODO_FAILED};
pub use types::{CreateTodo, CreateUser, Health, Todo, TodoId, UpdateTodo, User, UserId};
pub use user_panel::{UserPanel, CREATE_USER_FAILED};
