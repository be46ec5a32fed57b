//! Report generation modules for different output formats
//!
//! This module contains report generators for the `deps` listing:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use serde::Serialize;

use crate::error::DepvizError;
use crate::extractor::DependencyEntry;

/// The dependency listing extracted from one package manifest
#[derive(Debug, Serialize)]
pub struct DependencyReport {
    pub package: String,
    pub dependencies: Vec<DependencyListing>,
}

/// One declared dependency in the report
#[derive(Debug, Serialize)]
pub struct DependencyListing {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl DependencyReport {
    pub fn new(package: String, entries: Vec<DependencyEntry>) -> Self {
        Self {
            package,
            dependencies: entries
                .into_iter()
                .map(|entry| DependencyListing {
                    id: entry.id,
                    version: entry.version,
                })
                .collect(),
        }
    }
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from an extracted dependency listing
    fn generate_report(&self, report: &DependencyReport) -> Result<String, DepvizError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
