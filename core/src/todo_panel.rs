//! Create-todo form, completion toggle and owner lookup.
//!
//! # Design
//! Toggling is await-before-mutate: [`TodoPanel::begin_toggle`] only builds
//! the update request, and the todos collection changes in
//! [`TodoPanel::finish_toggle`] once the server confirmed it. A rejected
//! toggle is logged and otherwise invisible; there is nothing to revert.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::form::{require_filled, FormStatus, FILL_ALL_FIELDS, SUBMITTING_LABEL};
use crate::http::{Exchange, HttpRequest};
use crate::shell::MergeSink;
use crate::store::display_name;
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo, User, UserId};

pub const CREATE_TODO_FAILED: &str = "Failed to create todo";

/// An update request in flight for one todo.
#[derive(Debug, Clone)]
pub struct PendingToggle {
    pub id: TodoId,
    /// Value sent to the server; applied locally once confirmed.
    pub completed: bool,
    pub request: HttpRequest,
}

#[derive(Debug, Clone, Default)]
pub struct TodoPanel {
    title: String,
    description: String,
    selected_user: Option<UserId>,
    status: FormStatus,
}

impl TodoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn selected_user(&self) -> Option<UserId> {
        self.selected_user
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn select_user(&mut self, user_id: Option<UserId>) {
        self.selected_user = user_id;
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status.is_busy() {
            SUBMITTING_LABEL
        } else {
            "Create Todo"
        }
    }

    /// There is nobody to assign a todo to until users are loaded.
    pub fn can_submit(&self, users: &[User]) -> bool {
        !self.status.is_busy() && !users.is_empty()
    }

    /// Validate and build the create request. Returns `None` when the form
    /// is busy or invalid; an invalid form also gets its error set.
    pub fn submit(&mut self, client: &ApiClient) -> Option<HttpRequest> {
        if self.status.is_busy() {
            return None;
        }
        // Ids are server-assigned and start at 1; anything else is no selection.
        let user_id = match self.selected_user.filter(|id| *id > 0) {
            Some(id) => id,
            None => {
                self.status.reject(ApiError::Validation(FILL_ALL_FIELDS.to_string()));
                return None;
            }
        };
        if let Err(err) = require_filled(&[&self.title, &self.description]) {
            self.status.reject(err);
            return None;
        }
        let input = CreateTodo {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            user_id,
        };
        match client.build_create_todo(&input) {
            Ok(req) => {
                self.status.start();
                Some(req)
            }
            Err(err) => {
                self.status.reject(err);
                None
            }
        }
    }

    /// Apply the outcome of the request returned by [`submit`](Self::submit).
    pub fn finish_submit(&mut self, client: &ApiClient, exchange: Exchange, sink: &mut impl MergeSink) {
        let outcome = client.parse_create_todo(exchange);
        if let Some(todo) = self.status.settle(outcome, CREATE_TODO_FAILED) {
            tracing::info!(id = todo.id, user_id = todo.user_id, "todo created");
            sink.todo_created(todo);
            self.title.clear();
            self.description.clear();
            self.selected_user = None;
        }
    }

    /// Build the update that inverts `completed` for `id`. Unknown ids are
    /// a no-op.
    pub fn begin_toggle(&self, client: &ApiClient, todos: &[Todo], id: TodoId) -> Option<PendingToggle> {
        let todo = todos.iter().find(|t| t.id == id)?;
        let completed = !todo.completed;
        let update = UpdateTodo {
            completed: Some(completed),
        };
        match client.build_update_todo(id, &update) {
            Ok(request) => Some(PendingToggle {
                id,
                completed,
                request,
            }),
            Err(err) => {
                tracing::error!(id, error = %err, "failed to update todo");
                None
            }
        }
    }

    /// Replace the todos collection once the server confirmed the toggle.
    /// `current` is the collection as it stands when the response arrives.
    /// On failure only a log entry is written.
    pub fn finish_toggle(
        &self,
        client: &ApiClient,
        pending: PendingToggle,
        exchange: Exchange,
        current: &[Todo],
        sink: &mut impl MergeSink,
    ) {
        if let Err(err) = client.parse_update_todo(exchange) {
            tracing::error!(id = pending.id, error = %err, "failed to update todo");
            return;
        }
        let updated = current
            .iter()
            .map(|t| {
                if t.id == pending.id {
                    Todo {
                        completed: pending.completed,
                        ..t.clone()
                    }
                } else {
                    t.clone()
                }
            })
            .collect();
        sink.todos_updated(updated);
    }

    pub fn assignee<'a>(&self, users: &'a [User], todo: &Todo) -> &'a str {
        display_name(users, todo.user_id)
    }
}

/// Action button text for a todo row.
pub fn toggle_label(todo: &Todo) -> &'static str {
    if todo.completed {
        "Undo"
    } else {
        "Complete"
    }
}
