//! # depviz — Visualize Package Dependencies
//!
//! depviz extracts dependency metadata from .NET packaging artifacts — a
//! `.nupkg` archive carrying a `.nuspec` manifest, or a `.csproj` project
//! file referencing packages and other projects — builds a directed
//! dependency graph, and serializes it as Mermaid flow-diagram text that an
//! external rendering command can turn into an image.
//!
//! ## Main Components
//!
//! - **Extractor**: Opens a package archive, locates the embedded manifest,
//!   and parses its declared dependencies
//! - **Project**: Walks `ProjectReference` chains from a project file into a
//!   dependency tree, rejecting cyclic references
//! - **Graph**: Builds the dependency graph and serializes it as diagram text
//! - **Render**: Invokes the configured external rendering command
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use depviz::extractor::ManifestExtractor;
//! use depviz::graph::{DependencyGraphBuilder, DiagramRenderer};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Extract the dependency list from the package archive
//! let extractor = ManifestExtractor::new();
//! let dependencies = extractor.extract(Path::new("acme.widgets.1.2.0.nupkg"))?;
//!
//! // Step 2: Build the dependency graph, rooted at the package itself
//! let mut builder = DependencyGraphBuilder::new();
//! builder.build_package_graph("acme.widgets.1.2.0", &dependencies);
//!
//! // Step 3: Serialize the graph as Mermaid flow-diagram text
//! let renderer = DiagramRenderer::new();
//! let mut diagram = Vec::new();
//! renderer.render_mermaid(builder.graph(), &mut diagram)?;
//!
//! std::fs::write("graph.mmd", diagram).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod csproj_parser;
mod nuspec_parser;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod extractor;
pub mod graph;
pub mod project;
pub mod render;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    init_diagnostics();

    let cli = Cli::parse();
    execute_command(cli.command)
}

/// Route leveled diagnostics to stderr, filtered by `RUST_LOG`.
fn init_diagnostics() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
