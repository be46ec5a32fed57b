//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{DependencyReport, ReportGenerator};
use crate::error::DepvizError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &DependencyReport) -> Result<String, DepvizError> {
        let mut output = String::new();

        writeln!(
            output,
            "{} declares {} {}:",
            style(&report.package).bold(),
            report.dependencies.len(),
            pluralize("dependency", report.dependencies.len())
        )?;

        if report.dependencies.is_empty() {
            writeln!(output, "  (no declared dependencies)")?;
            return Ok(output);
        }

        for entry in &report.dependencies {
            match &entry.version {
                Some(version) => writeln!(output, "  • {} {}", entry.id, style(version).dim())?,
                None => writeln!(output, "  • {}", entry.id)?,
            }
        }

        Ok(output)
    }
}
