//! Core domain logic for the to-do list manager.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId};
pub use model::todo::{Priority, Todo, TodoId};
pub use service::manager::{
    ManagerError, ManagerResult, ProjectManager, TodoDraft, DEFAULT_PROJECT_NAME,
};
pub use store::{JsonFileStore, MemoryStore, StateStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
