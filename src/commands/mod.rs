//! Command implementations for the depviz CLI
//!
//! This module contains the implementations for each CLI command:
//! - package: graph the dependencies declared inside a package archive
//! - project: graph the dependency tree reachable from a project file
//! - deps: list the dependencies declared in a package manifest

pub mod deps;
pub mod package;
pub mod project;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Package { .. } => package::execute_package_command(command),
        Commands::Project { .. } => project::execute_project_command(command),
        Commands::Deps { .. } => deps::execute_deps_command(command),
    }
}
