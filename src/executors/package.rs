//! Package command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::PackageGraphOptions;
use crate::executors::{CommandExecutor, emit_and_render};
use crate::extractor::ManifestExtractor;
use crate::graph::DependencyGraphBuilder;
use crate::progress::ProgressReporter;
use crate::utils::path::artifact_stem;
use crate::utils::string::pluralize;

pub struct PackageExecutor;

impl CommandExecutor for PackageExecutor {
    type Config = PackageGraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let progress = ProgressReporter::new();
        let spinner = progress.spinner(&format!("Extracting {}", config.nupkg_path.display()));

        let extractor = ManifestExtractor::new();
        let dependencies = extractor
            .extract(&config.nupkg_path)
            .wrap_err("Failed to extract package manifest")?;

        spinner.finish_and_clear();
        eprintln!(
            "{} Extracted {} declared {}",
            style("✓").green(),
            dependencies.len(),
            pluralize("dependency", dependencies.len())
        );

        let root_id = artifact_stem(&config.nupkg_path);
        let mut builder = DependencyGraphBuilder::new();
        builder.build_package_graph(&root_id, &dependencies);

        emit_and_render(
            builder.graph(),
            config.diagram_file.as_deref(),
            config.renderer.as_deref(),
            config.output_image.as_deref(),
            config.width,
            config.height,
        )
    }
}
