//! CLI entry point.
//!
//! # Responsibility
//! - Parse arguments, bootstrap logging, and dispatch one command.
//! - Map command failures to stderr plus a nonzero exit code.

mod cli;
mod commands;
mod render;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = commands::run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
