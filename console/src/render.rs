//! Plain-text rendering of the page.

use std::fmt::Write;

use taskboard_core::{toggle_label, PageShell, TodoPanel, UserPanel};

/// Date part of a server timestamp; anything unparseable is shown as is.
pub fn display_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

pub fn page(shell: &PageShell, users: &UserPanel, todos: &TodoPanel) -> String {
    let mut out = String::new();
    if shell.is_loading() {
        out.push_str("Loading...\n");
        return out;
    }
    if let Some(error) = shell.error() {
        let _ = writeln!(out, "Error: {error}");
    }
    out.push_str(&user_section(shell, users));
    out.push('\n');
    out.push_str(&todo_section(shell, todos));
    out
}

pub fn user_section(shell: &PageShell, panel: &UserPanel) -> String {
    let mut out = String::new();
    if let Some(error) = panel.status().error() {
        let _ = writeln!(out, "! {error}");
    }
    let users = shell.users();
    let _ = writeln!(out, "Users ({})", users.len());
    for user in users.iter() {
        let _ = writeln!(
            out,
            "  #{} {} <{}>  Created: {}",
            user.id,
            user.name,
            user.email,
            display_date(&user.created_at)
        );
    }
    out
}

pub fn todo_section(shell: &PageShell, panel: &TodoPanel) -> String {
    let mut out = String::new();
    if let Some(error) = panel.status().error() {
        let _ = writeln!(out, "! {error}");
    }
    let users = shell.users();
    let todos = shell.todos();
    let _ = writeln!(out, "Todos ({})", todos.len());
    if todos.is_empty() {
        out.push_str("  No todos yet. Create one above!\n");
    }
    for todo in todos.iter() {
        let mark = if todo.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "  [{mark}] #{} {}", todo.id, todo.title);
        let _ = writeln!(out, "      {}", todo.description);
        let _ = writeln!(
            out,
            "      Assigned to: {}  Created: {}  ({})",
            panel.assignee(&users, todo),
            display_date(&todo.created_at),
            toggle_label(todo)
        );
    }
    out
}
