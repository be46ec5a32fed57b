//! # Manifest Extraction Module
//!
//! This module turns a package archive path into the flat dependency list
//! declared by its embedded manifest.
//!
//! ## Components
//!
//! - **ManifestExtractor**: Opens the archive as a zip container, extracts it
//!   into a scoped temporary directory, locates the first `.nuspec` entry at
//!   the top level, and parses its dependency declarations
//! - **DependencyEntry**: One declared (id, version) pair from the manifest
//!
//! ## Failure policy
//!
//! Only an unreadable archive aborts the run. A missing or malformed manifest
//! degrades to an empty dependency list with a `warn` event, so the pipeline
//! can still emit a (possibly trivial) diagram.

mod extractor_impl;

pub use extractor_impl::ManifestExtractor;

pub use crate::nuspec_parser::DependencyEntry;
