//! Domain model for projects and their to-do items.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Pin the stored wire shape (JSON field names) of both records.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUIDv7 id.
//! - A project owns its to-dos; there are no cross-project references.

pub mod project;
pub mod todo;
