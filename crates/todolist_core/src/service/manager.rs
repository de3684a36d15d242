//! Project manager service.
//!
//! # Responsibility
//! - Own the in-memory project list and mediate all persistence.
//! - Provide project and to-do CRUD entry points for front-end callers.
//!
//! # Invariants
//! - The manager always holds at least one project; a default project is
//!   created when the store yields none, and deleting the last one is
//!   refused.
//! - Every mutating operation saves the full state before returning.
//! - A failed or corrupt load degrades to empty state (then the default
//!   project); it never fails construction.

use crate::model::project::{Project, ProjectId};
use crate::model::todo::{Priority, Todo, TodoId};
use crate::store::{StateStore, StoreError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name given to the project created when no state exists yet.
pub const DEFAULT_PROJECT_NAME: &str = "Default Project";

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Errors from project manager operations.
#[derive(Debug)]
pub enum ManagerError {
    /// Project name is blank after trim.
    InvalidName,
    /// To-do title is blank after trim.
    InvalidTitle,
    /// Target project does not exist.
    ProjectNotFound(ProjectId),
    /// Target to-do does not exist in the selected project.
    TodoNotFound(TodoId),
    /// Deletion refused: the manager must keep at least one project.
    LastProject,
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for ManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "project name must not be blank"),
            Self::InvalidTitle => write!(f, "to-do title must not be blank"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TodoNotFound(id) => write!(f, "to-do not found: {id}"),
            Self::LastProject => write!(f, "cannot delete the last project"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ManagerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ManagerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Request model for creating one to-do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    /// Opaque date string, stored verbatim.
    pub due_date: String,
    pub priority: Priority,
}

/// Owner of the project list; all reads and mutations go through here.
pub struct ProjectManager<S: StateStore> {
    store: S,
    projects: Vec<Project>,
}

impl<S: StateStore> ProjectManager<S> {
    /// Loads state from the store and guarantees the default project.
    ///
    /// Load failures are logged and treated as empty state, mirroring a
    /// front-end that falls back to a fresh list when local storage is
    /// unreadable.
    pub fn new(store: S) -> Self {
        let projects = match store.load() {
            Ok(Some(projects)) => projects,
            Ok(None) => Vec::new(),
            Err(err) => {
                error!("event=state_load module=service status=error error={err}");
                Vec::new()
            }
        };

        let mut manager = Self { store, projects };
        if manager.projects.is_empty() {
            manager.projects.push(Project::new(DEFAULT_PROJECT_NAME));
            if let Err(err) = manager.persist() {
                error!("event=state_save module=service status=error error={err}");
            }
        }
        manager
    }

    /// Ordered view of all projects.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// First project in the list; exists by the manager invariant.
    pub fn default_project(&self) -> &Project {
        &self.projects[0]
    }

    /// Looks up a project by id.
    pub fn project(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == project_id)
    }

    /// Creates a project and returns its new id.
    pub fn create_project(&mut self, name: &str) -> ManagerResult<ProjectId> {
        let name = normalize(name).ok_or(ManagerError::InvalidName)?;
        let project = Project::new(name);
        let project_id = project.id;
        self.projects.push(project);
        self.persist()?;
        info!("event=project_create module=service status=ok project={project_id}");
        Ok(project_id)
    }

    /// Deletes a project by id.
    ///
    /// Refuses when only one project remains, regardless of the id given.
    pub fn delete_project(&mut self, project_id: ProjectId) -> ManagerResult<()> {
        if self.projects.len() <= 1 {
            return Err(ManagerError::LastProject);
        }

        let index = self
            .projects
            .iter()
            .position(|project| project.id == project_id)
            .ok_or(ManagerError::ProjectNotFound(project_id))?;
        self.projects.remove(index);
        self.persist()?;
        info!("event=project_delete module=service status=ok project={project_id}");
        Ok(())
    }

    /// Adds a to-do to a project and returns the new to-do id.
    pub fn add_todo(&mut self, project_id: ProjectId, draft: TodoDraft) -> ManagerResult<TodoId> {
        let title = normalize(&draft.title).ok_or(ManagerError::InvalidTitle)?;
        let todo = Todo::new(title, draft.description, draft.due_date, draft.priority);
        let todo_id = todo.id;
        self.project_mut(project_id)?.add_todo(todo);
        self.persist()?;
        Ok(todo_id)
    }

    /// Removes a to-do from a project.
    pub fn remove_todo(&mut self, project_id: ProjectId, todo_id: TodoId) -> ManagerResult<()> {
        let project = self.project_mut(project_id)?;
        if !project.remove_todo(todo_id) {
            return Err(ManagerError::TodoNotFound(todo_id));
        }
        self.persist()
    }

    /// Sets the completion flag of a to-do.
    pub fn set_completed(
        &mut self,
        project_id: ProjectId,
        todo_id: TodoId,
        completed: bool,
    ) -> ManagerResult<()> {
        self.todo_mut(project_id, todo_id)?.completed = completed;
        self.persist()
    }

    /// Updates the priority of a to-do.
    pub fn set_priority(
        &mut self,
        project_id: ProjectId,
        todo_id: TodoId,
        priority: Priority,
    ) -> ManagerResult<()> {
        self.todo_mut(project_id, todo_id)?.priority = priority;
        self.persist()
    }

    fn project_mut(&mut self, project_id: ProjectId) -> ManagerResult<&mut Project> {
        self.projects
            .iter_mut()
            .find(|project| project.id == project_id)
            .ok_or(ManagerError::ProjectNotFound(project_id))
    }

    fn todo_mut(&mut self, project_id: ProjectId, todo_id: TodoId) -> ManagerResult<&mut Todo> {
        self.project_mut(project_id)?
            .todo_mut(todo_id)
            .ok_or(ManagerError::TodoNotFound(todo_id))
    }

    fn persist(&self) -> ManagerResult<()> {
        self.store.save(&self.projects)?;
        Ok(())
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
