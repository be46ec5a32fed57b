//! Project command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ProjectGraphOptions;
use crate::error::DepvizError;

impl FromCommand for ProjectGraphOptions {
    fn from_command(command: Commands) -> Result<Self, DepvizError> {
        match command {
            Commands::Project {
                project,
                diagram,
                render,
            } => ProjectGraphOptions::builder()
                .with_project_path(project)
                .with_diagram_file(diagram.diagram_file)
                .with_renderer(render.renderer)
                .with_output_image(render.output_image)
                .with_width(render.width)
                .with_height(render.height)
                .build(),
            _ => Err(DepvizError::ConfigurationError {
                message: "Invalid command type for ProjectGraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ProjectGraphOptions);

/// Execute the project command for graphing project-reference trees
pub fn execute_project_command(command: Commands) -> Result<()> {
    let config = ProjectGraphOptions::from_command(command)
        .wrap_err("Failed to parse project command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::project::ProjectExecutor;
    ProjectExecutor::execute(config)
}
