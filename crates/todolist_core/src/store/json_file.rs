//! JSON file store.
//!
//! # Responsibility
//! - Persist the project list as one pretty-printed JSON document.
//! - Create the parent directory lazily on first save.
//!
//! # Invariants
//! - A missing file means "nothing stored yet", never an error.
//! - Saves replace the whole file; the file is always a complete document.

use super::{StateStore, StoreResult};
use crate::model::project::Project;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed state store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the state document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Vec<Project>>> {
        if !self.path.exists() {
            debug!("event=state_load module=store status=ok mode=file result=empty");
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        let projects: Vec<Project> = serde_json::from_str(&raw)?;
        info!(
            "event=state_load module=store status=ok mode=file projects={}",
            projects.len()
        );
        Ok(Some(projects))
    }

    fn save(&self, projects: &[Project]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(projects)?;
        fs::write(&self.path, raw)?;
        debug!(
            "event=state_save module=store status=ok mode=file projects={}",
            projects.len()
        );
        Ok(())
    }
}
