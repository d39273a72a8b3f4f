//! Create-user form.

use crate::client::ApiClient;
use crate::form::{require_filled, FormStatus, SUBMITTING_LABEL};
use crate::http::{Exchange, HttpRequest};
use crate::shell::MergeSink;
use crate::types::CreateUser;

pub const CREATE_USER_FAILED: &str = "Failed to create user";

#[derive(Debug, Clone, Default)]
pub struct UserPanel {
    name: String,
    email: String,
    status: FormStatus,
}

impl UserPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status.is_busy() {
            SUBMITTING_LABEL
        } else {
            "Create User"
        }
    }

    /// Validate and build the create request. Returns `None` when the form
    /// is busy or invalid; an invalid form also gets its error set.
    pub fn submit(&mut self, client: &ApiClient) -> Option<HttpRequest> {
        if self.status.is_busy() {
            return None;
        }
        if let Err(err) = require_filled(&[&self.name, &self.email]) {
            self.status.reject(err);
            return None;
        }
        let input = CreateUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        };
        match client.build_create_user(&input) {
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
        let outcome = client.parse_create_user(exchange);
        if let Some(user) = self.status.settle(outcome, CREATE_USER_FAILED) {
            tracing::info!(id = user.id, "user created");
            sink.user_created(user);
            self.name.clear();
            self.email.clear();
        }
    }
}
