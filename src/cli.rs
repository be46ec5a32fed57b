use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{DiagramArgs, FormatArgs, RenderArgs};

#[derive(Parser)]
#[command(
    name = "depviz",
    about = "Visualize NuGet package and project dependencies as diagrams",
    long_about = "depviz extracts the dependency metadata declared inside a .nupkg archive or a \
                  .csproj project file, builds a directed dependency graph, and writes it as \
                  Mermaid flow-diagram text. An external rendering command can be invoked on the \
                  diagram to produce an image.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Graph the dependencies declared inside a package archive
    ///
    /// Opens the archive as a zip container, locates the embedded .nuspec
    /// manifest, and graphs every declared dependency as an edge from the
    /// package to the dependency. A package without a manifest (or with a
    /// malformed one) still produces a diagram — just an empty one.
    #[command(
        long_about = "Extract the .nuspec manifest from a .nupkg archive and graph its declared \
                      dependencies. The package itself becomes the root node; each dependency id \
                      becomes a node with one edge from the root. The diagram is written to \
                      stdout or to --diagram-file, and optionally handed to the external \
                      rendering command given with --renderer."
    )]
    Package {
        /// Path to the .nupkg archive to inspect
        #[arg(value_name = "NUPKG", env = "DEPVIZ_NUPKG_PATH")]
        nupkg: PathBuf,

        #[command(flatten)]
        diagram: DiagramArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Graph the dependency tree reachable from a project file
    ///
    /// Follows ProjectReference chains recursively, collecting the
    /// PackageReference entries of every project along the way. Cyclic
    /// project references are rejected with an error.
    #[command(
        long_about = "Parse a .csproj file and recursively follow its ProjectReference entries, \
                      graphing one edge per parent-to-child relation at every depth. \
                      PackageReference entries become leaf nodes. Cyclic project references are \
                      reported as an error rather than walked forever."
    )]
    Project {
        /// Path to the .csproj file to walk
        #[arg(value_name = "PROJECT", env = "DEPVIZ_PROJECT_PATH")]
        project: PathBuf,

        #[command(flatten)]
        diagram: DiagramArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// List the dependencies declared in a package manifest
    ///
    /// Prints the flat dependency list extracted from the archive's manifest
    /// without building a graph. Useful for scripting against the JSON form.
    #[command(
        long_about = "Extract the .nuspec manifest from a .nupkg archive and print its declared \
                      dependencies as a human-readable list or as JSON."
    )]
    Deps {
        /// Path to the .nupkg archive to inspect
        #[arg(value_name = "NUPKG", env = "DEPVIZ_NUPKG_PATH")]
        nupkg: PathBuf,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
