//! # Graph Construction and Serialization Module
//!
//! This module builds the directed dependency graph and serializes it as
//! flow-diagram text.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: Constructs the graph from a flat dependency
//!   list (package mode) or a project-reference tree (project mode)
//! - **PackageNode**: Represents one package or project in the graph
//!
//! ### Graph Serialization
//! - **DiagramRenderer**: Serializes the graph as Mermaid flow-diagram text,
//!   one edge line per edge in insertion order
//!
//! ## Example
//!
//! ```
//! use depviz::extractor::DependencyEntry;
//! use depviz::graph::{DependencyGraphBuilder, DiagramRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dependencies = vec![
//!     DependencyEntry {
//!         id: "dep1".to_string(),
//!         version: Some("1.0".to_string()),
//!     },
//!     DependencyEntry {
//!         id: "dep2".to_string(),
//!         version: Some("2.0".to_string()),
//!     },
//! ];
//!
//! let mut builder = DependencyGraphBuilder::new();
//! builder.build_package_graph("root", &dependencies);
//!
//! let renderer = DiagramRenderer::new();
//! let mut output = Vec::new();
//! renderer.render_mermaid(builder.graph(), &mut output)?;
//!
//! let diagram = String::from_utf8(output)?;
//! assert_eq!(diagram, "graph TD;\n    root --> dep1;\n    root --> dep2;\n");
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

// Re-export main types
pub use builder::DependencyGraphBuilder;
pub use renderer::DiagramRenderer;
pub use types::PackageNode;
