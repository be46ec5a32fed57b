//! Command executors that handle the actual logic for each command

pub mod deps;
pub mod package;
pub mod project;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use petgraph::graph::DiGraph;

use crate::constants::diagram::DEFAULT_DIAGRAM_FILE;
use crate::graph::{DiagramRenderer, PackageNode};
use crate::render::RendererCommand;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Serialize the graph and hand it to the external renderer when one is
/// configured.
///
/// With neither a diagram file nor a renderer requested, the diagram goes to
/// stdout. Otherwise it is written to the diagram file (default name when
/// unset) and, when a renderer is configured, that file becomes the
/// renderer's input.
pub(crate) fn emit_and_render(
    graph: &DiGraph<PackageNode, ()>,
    diagram_file: Option<&Path>,
    renderer: Option<&Path>,
    output_image: Option<&Path>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    let diagram_renderer = DiagramRenderer::new();

    if renderer.is_none() && diagram_file.is_none() {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        diagram_renderer
            .render_mermaid(graph, &mut handle)
            .wrap_err("Failed to serialize diagram")?;
        return Ok(());
    }

    let diagram_path: PathBuf = diagram_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIAGRAM_FILE));

    let file = File::create(&diagram_path)
        .into_diagnostic()
        .wrap_err_with(|| {
            format!(
                "Failed to create diagram file '{}'",
                diagram_path.display()
            )
        })?;
    let mut writer = BufWriter::new(file);
    diagram_renderer
        .render_mermaid(graph, &mut writer)
        .wrap_err("Failed to serialize diagram")?;
    writer.flush().into_diagnostic()?;

    eprintln!(
        "{} Diagram written to {}",
        style("✓").green(),
        style(diagram_path.display()).bold()
    );

    if let (Some(program), Some(image)) = (renderer, output_image) {
        let command = RendererCommand::new(program.to_path_buf()).with_dimensions(width, height);
        command
            .render(&diagram_path, image)
            .wrap_err("Renderer invocation failed")?;

        eprintln!(
            "{} Rendered image written to {}",
            style("✓").green(),
            style(image.display()).bold()
        );
    }

    Ok(())
}
