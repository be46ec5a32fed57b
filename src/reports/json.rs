//! JSON format report generation

use super::{DependencyReport, ReportGenerator};
use crate::error::DepvizError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &DependencyReport) -> Result<String, DepvizError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::DependencyEntry;

    #[test]
    fn test_json_report_shape() {
        let report = DependencyReport::new(
            "acme.widgets".to_string(),
            vec![
                DependencyEntry {
                    id: "dep1".to_string(),
                    version: Some("1.0".to_string()),
                },
                DependencyEntry {
                    id: "dep2".to_string(),
                    version: None,
                },
            ],
        );

        let rendered = JsonReportGenerator::new().generate_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["package"], "acme.widgets");
        assert_eq!(value["dependencies"][0]["id"], "dep1");
        assert_eq!(value["dependencies"][0]["version"], "1.0");
        // Absent versions are omitted, not null
        assert!(value["dependencies"][1].get("version").is_none());
    }
}
