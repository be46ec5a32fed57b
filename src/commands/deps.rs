//! Deps command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::DepsOptions;
use crate::error::DepvizError;

impl FromCommand for DepsOptions {
    fn from_command(command: Commands) -> Result<Self, DepvizError> {
        match command {
            Commands::Deps { nupkg, format } => DepsOptions::builder()
                .with_nupkg_path(nupkg)
                .with_format(format.format)
                .build(),
            _ => Err(DepvizError::ConfigurationError {
                message: "Invalid command type for DepsOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DepsOptions);

/// Execute the deps command for listing declared dependencies
pub fn execute_deps_command(command: Commands) -> Result<()> {
    let config =
        DepsOptions::from_command(command).wrap_err("Failed to parse deps command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::deps::DepsExecutor;
    DepsExecutor::execute(config)
}
