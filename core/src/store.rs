//! In-memory entity collections owned by the page shell.
//!
//! Both collections are `Arc<[T]>` snapshots. Every mutation builds a new
//! slice and swaps it in, so a snapshot handed to a renderer never changes
//! underneath it.

use std::sync::Arc;

use crate::types::{Todo, User, UserId};

/// Shown for a todo whose owner is not in the loaded users.
pub const UNKNOWN_USER: &str = "Unknown User";

#[derive(Debug, Clone)]
pub struct EntityStore {
    users: Arc<[User]>,
    todos: Arc<[Todo]>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self {
            users: Vec::new().into(),
            todos: Vec::new().into(),
        }
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> Arc<[User]> {
        Arc::clone(&self.users)
    }

    pub fn todos(&self) -> Arc<[Todo]> {
        Arc::clone(&self.todos)
    }

    pub fn replace_all(&mut self, users: Vec<User>, todos: Vec<Todo>) {
        self.users = users.into();
        self.todos = todos.into();
    }

    pub fn append_user(&mut self, user: User) {
        self.users = appended(&self.users, user);
    }

    pub fn append_todo(&mut self, todo: Todo) {
        self.todos = appended(&self.todos, todo);
    }

    pub fn replace_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos.into();
    }

    pub fn user_name(&self, user_id: UserId) -> &str {
        display_name(&self.users, user_id)
    }
}

/// Owner name for `user_id`, or [`UNKNOWN_USER`].
pub fn display_name(users: &[User], user_id: UserId) -> &str {
    users
        .iter()
        .find(|u| u.id == user_id)
        .map(|u| u.name.as_str())
        .unwrap_or(UNKNOWN_USER)
}

fn appended<T: Clone>(current: &[T], item: T) -> Arc<[T]> {
    let mut next = Vec::with_capacity(current.len() + 1);
    next.extend_from_slice(current);
    next.push(item);
    next.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: UserId, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            created_at: "2024-01-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn append_keeps_arrival_order() {
        let mut store = EntityStore::new();
        store.append_user(user(7, "Zed"));
        store.append_user(user(2, "Amy"));
        let ids: Vec<_> = store.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![7, 2]);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_appends() {
        let mut store = EntityStore::new();
        store.append_user(user(1, "Ana"));
        let before = store.users();
        store.append_user(user(2, "Bob"));
        assert_eq!(before.len(), 1);
        assert_eq!(store.users().len(), 2);
    }

    #[test]
    fn unknown_owner_renders_placeholder() {
        let mut store = EntityStore::new();
        assert_eq!(store.user_name(1), UNKNOWN_USER);
        store.append_user(user(1, "Ana"));
        assert_eq!(store.user_name(1), "Ana");
        assert_eq!(store.user_name(99), UNKNOWN_USER);
    }
}
