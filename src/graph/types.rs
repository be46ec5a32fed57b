//! Core graph types
//!
//! The fundamental data structure of the dependency graph. Node identity is
//! the package id; the version is carried as metadata and never participates
//! in identity.

/// Represents a package or project node in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    pub id: String,
    pub version: Option<String>,
}

impl PackageNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }
}
