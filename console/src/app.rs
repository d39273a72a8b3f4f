//! One mounted page: the shell, both panels and the transport that serves
//! them. Every method is one user action.

use taskboard_core::{ApiClient, PageShell, TodoId, TodoPanel, UserId, UserPanel};

use crate::transport::Transport;

pub struct App<T> {
    transport: T,
    shell: PageShell,
    users: UserPanel,
    todos: TodoPanel,
}

impl<T: Transport> App<T> {
    pub fn new(client: ApiClient, transport: T) -> Self {
        Self {
            transport,
            shell: PageShell::new(client),
            users: UserPanel::new(),
            todos: TodoPanel::new(),
        }
    }

    pub fn shell(&self) -> &PageShell {
        &self.shell
    }

    pub fn user_panel(&self) -> &UserPanel {
        &self.users
    }

    pub fn todo_panel(&self) -> &TodoPanel {
        &self.todos
    }

    /// Initial load, also used by the banner's retry action. Returns whether
    /// both collections arrived.
    pub fn load(&mut self) -> bool {
        let reqs = self.shell.begin_load();
        let (users, todos) = self.transport.execute_pair(reqs);
        self.shell.finish_load(users, todos);
        self.shell.error().is_none()
    }

    /// Returns whether a user was appended; otherwise the user panel holds
    /// the error.
    pub fn create_user(&mut self, name: &str, email: &str) -> bool {
        self.users.set_name(name);
        self.users.set_email(email);
        let client = self.shell.client().clone();
        let Some(req) = self.users.submit(&client) else {
            return false;
        };
        let exchange = self.transport.execute(req);
        self.users.finish_submit(&client, exchange, &mut self.shell);
        self.users.status().error().is_none()
    }

    /// Returns whether a todo was appended; otherwise the todo panel holds
    /// the error.
    pub fn create_todo(&mut self, title: &str, description: &str, user_id: Option<UserId>) -> bool {
        self.todos.set_title(title);
        self.todos.set_description(description);
        self.todos.select_user(user_id);
        let client = self.shell.client().clone();
        let Some(req) = self.todos.submit(&client) else {
            return false;
        };
        let exchange = self.transport.execute(req);
        self.todos.finish_submit(&client, exchange, &mut self.shell);
        self.todos.status().error().is_none()
    }

    /// Failures are logged by the panel and leave the list as it was.
    pub fn toggle(&mut self, id: TodoId) {
        let client = self.shell.client().clone();
        let Some(pending) = self.todos.begin_toggle(&client, &self.shell.todos(), id) else {
            tracing::debug!(id, "no such todo loaded");
            return;
        };
        let exchange = self.transport.execute(pending.request.clone());
        // Re-read after the round trip; the confirmed value lands in whatever
        // the collection holds now.
        let current = self.shell.todos();
        self.todos.finish_toggle(&client, pending, exchange, &current, &mut self.shell);
    }
}
