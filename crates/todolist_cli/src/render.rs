//! Text and JSON rendering of manager state.
//!
//! # Responsibility
//! - Reflect current state into user-facing output; never mutate it.
//! - Keep `--json` output a stable `{ok, data}` envelope.

use chrono::NaiveDate;
use serde::Serialize;
use todolist_core::{Project, Todo};

/// Envelope for all `--json` output.
#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

pub fn print_list<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for item in data {
            println!("{}", row(item));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: &T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", text(data));
    }
    Ok(())
}

/// One-line project summary: id, name, to-do count.
pub fn project_row(project: &Project) -> String {
    format!(
        "{}\t{}\ttodos: {}",
        project.id,
        project.name,
        project.todos.len()
    )
}

/// One-line to-do summary: checkbox, priority, title, due date, id.
pub fn todo_row(todo: &Todo) -> String {
    format!(
        "[{}] {}\t{}\tdue: {}\t{}",
        if todo.completed { "x" } else { " " },
        todo.priority,
        todo.title,
        format_due(&todo.due_date),
        todo.id
    )
}

/// Multi-line to-do detail view.
pub fn todo_detail(todo: &Todo) -> String {
    format!(
        "title: {}\ndescription: {}\ndue: {}\npriority: {}\nstatus: {}\nid: {}",
        todo.title,
        todo.description,
        format_due(&todo.due_date),
        todo.priority,
        if todo.completed { "completed" } else { "incomplete" },
        todo.id
    )
}

/// Formats an ISO `YYYY-MM-DD` due date as `Mon D, YYYY`.
///
/// Anything that does not parse is shown verbatim; rendering never fails
/// on malformed input. Empty due dates render as `-`.
pub fn format_due(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
