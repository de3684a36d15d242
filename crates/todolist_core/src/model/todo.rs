//! To-do item domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record and its stored wire shape.
//! - Provide constructors that keep id and default-flag invariants.
//!
//! # Invariants
//! - `id` is stable and never reused for another to-do.
//! - `completed` starts as `false` for newly created items.
//! - `due_date` is an opaque date string; it is stored verbatim and only
//!   interpreted at render time.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a to-do item.
///
/// UUIDv7: unique and derived from creation time, so ids sort in
/// creation order without a separate counter.
pub type TodoId = Uuid;

/// Urgency level attached to every to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Low
    }
}

impl Priority {
    /// Stable lowercase name used in stored state and user-facing output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical to-do record.
///
/// Field names follow the stored JSON schema (`dueDate`), so a state
/// document round-trips byte-compatibly through serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable id used for lookup and removal.
    pub id: TodoId,
    pub title: String,
    pub description: String,
    /// Serialized as `dueDate` to match the stored state schema.
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub priority: Priority,
    /// Completion flag; defaults to `false` on creation.
    pub completed: bool,
}

impl Todo {
    /// Creates a new to-do with a generated creation-time-derived id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            priority,
            completed: false,
        }
    }
}
