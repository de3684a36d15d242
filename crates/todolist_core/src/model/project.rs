//! Project domain model.
//!
//! # Responsibility
//! - Own an ordered list of to-dos under one named project.
//! - Provide lookup and removal helpers by stable to-do id.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - To-do order is insertion order; removal preserves relative order.

use crate::model::todo::{Todo, TodoId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Named container for an ordered list of to-dos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable id used for selection and deletion.
    pub id: ProjectId,
    pub name: String,
    pub todos: Vec<Todo>,
}

impl Project {
    /// Creates an empty project with a generated stable id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// Appends a to-do at the end of the list.
    pub fn add_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Removes a to-do by id. Returns `false` when the id is unknown.
    pub fn remove_todo(&mut self, todo_id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != todo_id);
        self.todos.len() != before
    }

    /// Looks up a to-do by id.
    pub fn todo(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    /// Looks up a to-do by id for mutation.
    pub fn todo_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }
}
