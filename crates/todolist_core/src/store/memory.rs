//! In-memory state store.
//!
//! # Responsibility
//! - Provide a file-free store for tests and embedding.
//! - Keep full JSON round-trip semantics, not just a `Vec` clone.
//!
//! # Invariants
//! - The stored slot holds serialized JSON, so loads exercise the same
//!   deserialization path as the file store.
//! - Clones share the same slot, which lets one buffer outlive a manager.

use super::{StateStore, StoreResult};
use crate::model::project::Project;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared-slot in-memory store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a raw document, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// Returns the raw stored document, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> StoreResult<Option<Vec<Project>>> {
        match self.slot.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, projects: &[Project]) -> StoreResult<()> {
        let raw = serde_json::to_string(projects)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}
