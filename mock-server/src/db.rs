//! In-memory tables with per-table sequential ids.
//!
//! Rows keep insertion order so list endpoints return records in the order
//! they were created.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::model::{CreateTodo, CreateUser, Todo, User};

pub type Db = Arc<RwLock<Tables>>;

#[derive(Debug, Default)]
pub struct Tables {
    users: Vec<User>,
    todos: Vec<Todo>,
    last_user_id: i64,
    last_todo_id: i64,
}

/// UTC timestamp in ISO-8601 without an offset suffix.
pub fn timestamp() -> String {
    Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

impl Tables {
    /// Three users and four todos for a fresh demo instance.
    pub fn seeded() -> Self {
        let mut tables = Self::default();
        for (name, email) in [
            ("John Doe", "john@example.com"),
            ("Jane Smith", "jane@example.com"),
            ("Bob Johnson", "bob@example.com"),
        ] {
            tables.insert_user(CreateUser {
                name: name.to_string(),
                email: email.to_string(),
            });
        }
        for (title, description, completed, user_id) in [
            (
                "Setup project structure",
                "Create the initial project structure with the web frontend and API",
                true,
                1,
            ),
            (
                "Implement user authentication",
                "Add user login and registration functionality",
                false,
                1,
            ),
            (
                "Design database schema",
                "Plan the database structure for the application",
                false,
                2,
            ),
            (
                "Write API documentation",
                "Document all API endpoints and their usage",
                false,
                3,
            ),
        ] {
            tables.insert_todo(CreateTodo {
                title: title.to_string(),
                description: description.to_string(),
                completed,
                user_id,
            });
        }
        tables
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_mut(&mut self, id: i64) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn todo(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn todo_mut(&mut self, id: i64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn insert_user(&mut self, input: CreateUser) -> User {
        self.last_user_id += 1;
        let user = User {
            id: self.last_user_id,
            name: input.name,
            email: input.email,
            created_at: timestamp(),
            updated_at: None,
        };
        self.users.push(user.clone());
        user
    }

    pub fn insert_todo(&mut self, input: CreateTodo) -> Todo {
        self.last_todo_id += 1;
        let todo = Todo {
            id: self.last_todo_id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            user_id: input.user_id,
            created_at: timestamp(),
            updated_at: None,
        };
        self.todos.push(todo.clone());
        todo
    }

    pub fn remove_user(&mut self, id: i64) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }

    pub fn remove_todo(&mut self, id: i64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_per_table() {
        let mut tables = Tables::default();
        let a = tables.insert_user(CreateUser {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        });
        let b = tables.insert_user(CreateUser {
            name: "B".to_string(),
            email: "b@x.com".to_string(),
        });
        let t = tables.insert_todo(CreateTodo {
            title: "t".to_string(),
            description: "d".to_string(),
            completed: false,
            user_id: b.id,
        });
        assert_eq!((a.id, b.id, t.id), (1, 2, 1));
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut tables = Tables::seeded();
        assert!(tables.remove_todo(4));
        assert!(!tables.remove_todo(4));
        let next = tables.insert_todo(CreateTodo {
            title: "t".to_string(),
            description: "d".to_string(),
            completed: false,
            user_id: 1,
        });
        assert_eq!(next.id, 5);
    }

    #[test]
    fn seeded_tables_reference_existing_users() {
        let tables = Tables::seeded();
        assert_eq!(tables.users().len(), 3);
        assert_eq!(tables.todos().len(), 4);
        assert!(tables.todos().iter().all(|t| tables.user(t.user_id).is_some()));
        assert!(tables.todo(1).unwrap().completed);
    }

    #[test]
    fn timestamp_has_no_offset_suffix() {
        let ts = timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }
}
