//! State store abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the load/save contract for the whole project list.
//! - Isolate file-system and JSON details from service orchestration.
//!
//! # Invariants
//! - A store persists the full state document on every save; there are no
//!   partial writes of individual records.
//! - `load` distinguishes "nothing stored yet" (`Ok(None)`) from a
//!   storage failure (`Err`).

use crate::model::project::Project;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from state persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "state storage i/o failure: {err}"),
            Self::Serde(err) => write!(f, "invalid stored state: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Persistence contract for the full project list.
///
/// Implementations serialize state as one JSON document, mirroring a
/// browser local-storage slot: read the whole value, write the whole value.
pub trait StateStore {
    /// Loads the stored project list.
    ///
    /// Returns `Ok(None)` when no state has ever been saved.
    fn load(&self) -> StoreResult<Option<Vec<Project>>>;

    /// Serializes and persists the full project list.
    fn save(&self, projects: &[Project]) -> StoreResult<()>;
}
