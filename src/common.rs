//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Diagram output arguments shared by the graphing commands
#[derive(Args, Debug, Clone)]
pub struct DiagramArgs {
    /// Where to write the intermediate diagram text (stdout if not specified
    /// and no renderer is requested)
    #[arg(short = 'd', long, value_name = "PATH", env = "DEPVIZ_DIAGRAM_FILE")]
    pub diagram_file: Option<PathBuf>,
}

/// External renderer arguments shared by the graphing commands
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// External rendering command invoked on the diagram file
    #[arg(
        long,
        value_name = "COMMAND",
        env = "DEPVIZ_RENDERER",
        requires = "output_image"
    )]
    pub renderer: Option<PathBuf>,

    /// Image file the renderer should produce
    #[arg(
        short = 'o',
        long = "output",
        value_name = "IMAGE",
        env = "DEPVIZ_OUTPUT",
        requires = "renderer"
    )]
    pub output_image: Option<PathBuf>,

    /// Pixel width passed to the renderer
    #[arg(long, value_name = "PX", env = "DEPVIZ_WIDTH", requires = "renderer")]
    pub width: Option<u32>,

    /// Pixel height passed to the renderer
    #[arg(long, value_name = "PX", env = "DEPVIZ_HEIGHT", requires = "renderer")]
    pub height: Option<u32>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "DEPVIZ_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DepvizError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DepvizError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DepvizError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
