//! Package command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::PackageGraphOptions;
use crate::error::DepvizError;

impl FromCommand for PackageGraphOptions {
    fn from_command(command: Commands) -> Result<Self, DepvizError> {
        match command {
            Commands::Package {
                nupkg,
                diagram,
                render,
            } => PackageGraphOptions::builder()
                .with_nupkg_path(nupkg)
                .with_diagram_file(diagram.diagram_file)
                .with_renderer(render.renderer)
                .with_output_image(render.output_image)
                .with_width(render.width)
                .with_height(render.height)
                .build(),
            _ => Err(DepvizError::ConfigurationError {
                message: "Invalid command type for PackageGraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(PackageGraphOptions);

/// Execute the package command for graphing archive dependencies
pub fn execute_package_command(command: Commands) -> Result<()> {
    let config = PackageGraphOptions::from_command(command)
        .wrap_err("Failed to parse package command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::package::PackageExecutor;
    PackageExecutor::execute(config)
}
