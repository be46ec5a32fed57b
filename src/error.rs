use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DepvizError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(depviz::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open package archive '{path}'")]
    #[diagnostic(
        code(depviz::archive_error),
        help("The file must be a readable zip-format package archive")
    )]
    ArchiveError {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Invalid XML in manifest '{file}'")]
    #[diagnostic(
        code(depviz::manifest_parse_error),
        help("Check the manifest XML near the reported position")
    )]
    ManifestParseError {
        file: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Cyclic project reference involving '{path}'")]
    #[diagnostic(
        code(depviz::project_cycle),
        help("Break the ProjectReference loop between the projects on the reference chain")
    )]
    ProjectCycleError { path: PathBuf },

    #[error("Failed to launch renderer: {command}")]
    #[diagnostic(
        code(depviz::render_launch_error),
        help("Check that the renderer command exists and is executable")
    )]
    RenderLaunchError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Renderer command failed ({status}): {command}")]
    #[diagnostic(code(depviz::render_failed), help("Renderer stderr: {stderr}"))]
    RenderFailedError {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(depviz::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(depviz::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(depviz::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(depviz::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(depviz::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}
