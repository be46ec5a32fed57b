//! Project command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::ProjectGraphOptions;
use crate::executors::{CommandExecutor, emit_and_render};
use crate::graph::DependencyGraphBuilder;
use crate::project::ProjectWalker;
use crate::utils::string::pluralize;

pub struct ProjectExecutor;

impl CommandExecutor for ProjectExecutor {
    type Config = ProjectGraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let mut walker = ProjectWalker::new();
        let tree = walker
            .walk(&config.project_path)
            .wrap_err("Failed to walk project references")?;

        let mut builder = DependencyGraphBuilder::new();
        builder.build_project_graph(&tree);

        let edge_count = builder.graph().edge_count();
        eprintln!(
            "{} Walked {} with {} reference {}",
            style("✓").green(),
            style(&tree.id).bold(),
            edge_count,
            pluralize("edge", edge_count)
        );

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
