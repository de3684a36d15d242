//! Command dispatch: load state, apply one mutation, render the result.
//!
//! # Responsibility
//! - Resolve the state file and project selection for every command.
//! - Call into the core manager and reflect the outcome to the user.
//!
//! # Invariants
//! - Logging failures degrade to a stderr warning; they never abort a
//!   command.
//! - `--project` falls back to the default (first) project when omitted.

use crate::cli::{Cli, Commands, ProjectCommands};
use crate::render;
use anyhow::{anyhow, Context};
use log::debug;
use std::path::{Path, PathBuf};
use todolist_core::{
    default_log_level, init_logging, JsonFileStore, ProjectId, ProjectManager, StateStore, Todo,
    TodoDraft, TodoId,
};
use uuid::Uuid;

const STATE_FILE_NAME: &str = "todo_projects.json";

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let data_file = resolve_data_file(cli)?;
    init_cli_logging(&data_file);

    debug!(
        "event=command_dispatch module=cli status=start data_file={}",
        data_file.display()
    );
    let mut manager = ProjectManager::new(JsonFileStore::new(&data_file));

    match &cli.command {
        Commands::Project { command } => match command {
            ProjectCommands::Add { name } => {
                let id = manager.create_project(name)?;
                let project = manager
                    .project(id)
                    .context("created project should be loadable")?;
                render::print_one(cli.json, project, render::project_row)
            }
            ProjectCommands::List => {
                render::print_list(cli.json, manager.projects(), render::project_row)
            }
            ProjectCommands::Remove { project } => {
                manager.delete_project(*project)?;
                render::print_one(cli.json, &project.to_string(), |id| {
                    format!("deleted project {id}")
                })
            }
        },
        Commands::Add {
            title,
            project,
            description,
            due,
            priority,
        } => {
            let project_id = resolve_project(&manager, *project)?;
            let todo_id = manager.add_todo(
                project_id,
                TodoDraft {
                    title: title.clone(),
                    description: description.clone(),
                    due_date: due.clone(),
                    priority: (*priority).into(),
                },
            )?;
            let todo = lookup_todo(&manager, project_id, todo_id)?;
            render::print_one(cli.json, todo, render::todo_row)
        }
        Commands::List { project } => {
            let project_id = resolve_project(&manager, *project)?;
            let project = manager
                .project(project_id)
                .context("selected project should be loadable")?;
            render::print_list(cli.json, &project.todos, render::todo_row)
        }
        Commands::Show { todo, project } => {
            let project_id = resolve_project(&manager, *project)?;
            let todo = lookup_todo(&manager, project_id, *todo)?;
            render::print_one(cli.json, todo, render::todo_detail)
        }
        Commands::Remove { todo, project } => {
            let project_id = resolve_project(&manager, *project)?;
            manager.remove_todo(project_id, *todo)?;
            render::print_one(cli.json, &todo.to_string(), |id| format!("removed {id}"))
        }
        Commands::Done { todo, project } => {
            let project_id = resolve_project(&manager, *project)?;
            manager.set_completed(project_id, *todo, true)?;
            let todo = lookup_todo(&manager, project_id, *todo)?;
            render::print_one(cli.json, todo, render::todo_row)
        }
        Commands::Undone { todo, project } => {
            let project_id = resolve_project(&manager, *project)?;
            manager.set_completed(project_id, *todo, false)?;
            let todo = lookup_todo(&manager, project_id, *todo)?;
            render::print_one(cli.json, todo, render::todo_row)
        }
        Commands::Priority {
            todo,
            level,
            project,
        } => {
            let project_id = resolve_project(&manager, *project)?;
            manager.set_priority(project_id, *todo, (*level).into())?;
            let todo = lookup_todo(&manager, project_id, *todo)?;
            render::print_one(cli.json, todo, render::todo_row)
        }
    }
}

fn resolve_data_file(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.data_file {
        return Ok(path.clone());
    }
    let home = std::env::var("HOME").context("HOME must be set to locate the state file")?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("todolist")
        .join(STATE_FILE_NAME))
}

/// Best-effort logging bootstrap next to the state file.
fn init_cli_logging(data_file: &Path) {
    let Some(parent) = data_file.parent() else {
        return;
    };
    let log_dir = parent.join("logs");
    let log_dir = if log_dir.is_absolute() {
        log_dir
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(log_dir),
            Err(_) => return,
        }
    };
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn resolve_project<S: StateStore>(
    manager: &ProjectManager<S>,
    selected: Option<Uuid>,
) -> anyhow::Result<ProjectId> {
    match selected {
        Some(id) => manager
            .project(id)
            .map(|project| project.id)
            .ok_or_else(|| anyhow!("project not found: {id}")),
        None => Ok(manager.default_project().id),
    }
}

fn lookup_todo<S: StateStore>(
    manager: &ProjectManager<S>,
    project_id: ProjectId,
    todo_id: TodoId,
) -> anyhow::Result<&Todo> {
    manager
        .project(project_id)
        .and_then(|project| project.todo(todo_id))
        .ok_or_else(|| anyhow!("to-do not found: {todo_id}"))
}
