//! Page-level orchestration: the paired initial fetch, the error banner with
//! retry, and the merge callbacks the panels call after a successful
//! mutation.

use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{Exchange, HttpRequest};
use crate::store::EntityStore;
use crate::types::{Todo, User, UserId};

pub const LOAD_FAILED: &str = "Failed to fetch data from API";

/// Merge callbacks a panel invokes once the server confirmed a mutation.
pub trait MergeSink {
    fn user_created(&mut self, user: User);
    fn todo_created(&mut self, todo: Todo);
    fn todos_updated(&mut self, todos: Vec<Todo>);
}

/// The two requests of the initial load. The host must issue both
/// concurrently and hand both outcomes to [`PageShell::finish_load`].
#[derive(Debug, Clone)]
pub struct LoadRequests {
    pub users: HttpRequest,
    pub todos: HttpRequest,
}

#[derive(Debug)]
pub struct PageShell {
    client: ApiClient,
    store: EntityStore,
    loading: bool,
    error: Option<String>,
}

impl PageShell {
    /// A freshly mounted page is loading until the first fetch settles.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            store: EntityStore::new(),
            loading: true,
            error: None,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Page-level banner text, set when the paired fetch failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn users(&self) -> Arc<[User]> {
        self.store.users()
    }

    pub fn todos(&self) -> Arc<[Todo]> {
        self.store.todos()
    }

    pub fn user_name(&self, user_id: UserId) -> &str {
        self.store.user_name(user_id)
    }

    pub fn begin_load(&mut self) -> LoadRequests {
        self.loading = true;
        LoadRequests {
            users: self.client.build_list_users(),
            todos: self.client.build_list_todos(),
        }
    }

    /// Banner retry action. Identical to the initial load.
    pub fn retry(&mut self) -> LoadRequests {
        self.begin_load()
    }

    /// Apply the paired fetch. Both halves must succeed; otherwise neither
    /// collection changes and the banner is raised.
    pub fn finish_load(&mut self, users: Exchange, todos: Exchange) {
        self.loading = false;
        let users = self.client.parse_list_users(users);
        let todos = self.client.parse_list_todos(todos);
        match pair(users, todos) {
            Ok((users, todos)) => {
                tracing::info!(users = users.len(), todos = todos.len(), "loaded collections");
                self.store.replace_all(users, todos);
                self.error = None;
            }
            Err(err) => {
                tracing::error!(error = %err, "API Error");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }
}

fn pair<A, B>(a: Result<A, ApiError>, b: Result<B, ApiError>) -> Result<(A, B), ApiError> {
    Ok((a?, b?))
}

impl MergeSink for PageShell {
    fn user_created(&mut self, user: User) {
        tracing::debug!(id = user.id, "user appended");
        self.store.append_user(user);
    }

    fn todo_created(&mut self, todo: Todo) {
        tracing::debug!(id = todo.id, "todo appended");
        self.store.append_todo(todo);
    }

    fn todos_updated(&mut self, todos: Vec<Todo>) {
        self.store.replace_todos(todos);
    }
}
