//! # Configuration Module
//!
//! This module provides configuration structures for all depviz commands.
//! Each command has its own config module with a builder for validated
//! construction.
//!
//! ## Command Configurations
//!
//! - **PackageGraphOptions**: Configuration for the `package` command
//! - **ProjectGraphOptions**: Configuration for the `project` command
//! - **DepsOptions**: Configuration for the `deps` command
//!
//! ## Example
//!
//! ```
//! use depviz::common::ConfigBuilder;
//! use depviz::config::PackageGraphOptions;
//!
//! let options = PackageGraphOptions::builder()
//!     .with_nupkg_path("acme.widgets.1.2.0.nupkg".into())
//!     .with_diagram_file(Some("graph.mmd".into()))
//!     .with_renderer(None)
//!     .with_output_image(None)
//!     .with_width(None)
//!     .with_height(None)
//!     .build()
//!     .unwrap();
//!
//! assert!(options.renderer.is_none());
//! ```

pub mod deps;
pub mod package;
pub mod project;

pub use deps::DepsOptions;
pub use package::PackageGraphOptions;
pub use project::ProjectGraphOptions;
