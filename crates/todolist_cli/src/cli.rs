//! Argument surface for the to-do list CLI.
//!
//! One subcommand per user action; `--project` selects a project by id and
//! falls back to the default (first) project when omitted.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use todolist_core::Priority;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "todolist", version, about = "Multi-project to-do list")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Override the state file location"
    )]
    pub data_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage projects.
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Add a to-do to a project.
    Add {
        title: String,
        #[arg(long)]
        project: Option<Uuid>,
        #[arg(long, default_value = "")]
        description: String,
        /// Due date, e.g. 2026-09-15. Stored verbatim.
        #[arg(long, default_value = "")]
        due: String,
        #[arg(long, value_enum, default_value_t = PriorityArg::Low)]
        priority: PriorityArg,
    },
    /// List the to-dos of a project.
    List {
        #[arg(long)]
        project: Option<Uuid>,
    },
    /// Show full details of one to-do.
    Show {
        todo: Uuid,
        #[arg(long)]
        project: Option<Uuid>,
    },
    /// Remove a to-do.
    Remove {
        todo: Uuid,
        #[arg(long)]
        project: Option<Uuid>,
    },
    /// Mark a to-do as completed.
    Done {
        todo: Uuid,
        #[arg(long)]
        project: Option<Uuid>,
    },
    /// Mark a to-do as not completed.
    Undone {
        todo: Uuid,
        #[arg(long)]
        project: Option<Uuid>,
    },
    /// Change the priority of a to-do.
    Priority {
        todo: Uuid,
        #[arg(value_enum)]
        level: PriorityArg,
        #[arg(long)]
        project: Option<Uuid>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Create a new project.
    Add { name: String },
    /// List all projects.
    List,
    /// Delete a project. The last remaining project cannot be deleted.
    Remove { project: Uuid },
}

/// Argument-side mirror of the core priority enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Low => Self::Low,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::High => Self::High,
        }
    }
}
