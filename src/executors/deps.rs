//! Deps command executor

use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::DepsOptions;
use crate::executors::CommandExecutor;
use crate::extractor::ManifestExtractor;
use crate::reports::{
    DependencyReport, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};
use crate::utils::path::artifact_stem;

pub struct DepsExecutor;

impl CommandExecutor for DepsExecutor {
    type Config = DepsOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let extractor = ManifestExtractor::new();
        let dependencies = extractor
            .extract(&config.nupkg_path)
            .wrap_err("Failed to extract package manifest")?;

        let report = DependencyReport::new(artifact_stem(&config.nupkg_path), dependencies);

        let generator: Box<dyn ReportGenerator> = match config.format {
            OutputFormat::Human => Box::new(HumanReportGenerator::new()),
            OutputFormat::Json => Box::new(JsonReportGenerator::new()),
        };

        let rendered = generator
            .generate_report(&report)
            .wrap_err("Failed to generate dependency report")?;
        println!("{rendered}");

        Ok(())
    }
}
