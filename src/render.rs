//! External renderer invocation
//!
//! The serialized diagram is handed to an external rendering command that
//! turns it into an image. The command is invoked once per run; a failure is
//! reported with the full command line and captured stderr, and is never
//! retried.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::DepvizError;

/// The external rendering command and its optional output dimensions.
pub struct RendererCommand {
    program: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
}

impl RendererCommand {
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            width: None,
            height: None,
        }
    }

    pub fn with_dimensions(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Invoke `<program> -i <diagram> -o <image> [-w <width> -H <height>]`.
    ///
    /// Exit code 0 is success; anything else is a terminal failure carrying
    /// the command line, exit status, and the renderer's stderr.
    pub fn render(&self, diagram: &Path, image: &Path) -> Result<(), DepvizError> {
        let mut command = Command::new(&self.program);
        command.arg("-i").arg(diagram).arg("-o").arg(image);
        if let Some(width) = self.width {
            command.arg("-w").arg(width.to_string());
        }
        if let Some(height) = self.height {
            command.arg("-H").arg(height.to_string());
        }

        let rendered = describe(&command);
        tracing::debug!(command = %rendered, "invoking renderer");

        let output = command
            .output()
            .map_err(|source| DepvizError::RenderLaunchError {
                command: rendered.clone(),
                source,
            })?;

        if !output.status.success() {
            let status = output
                .status
                .code()
                .map_or_else(|| "terminated by signal".to_string(), |code| {
                    format!("exit code {code}")
                });
            return Err(DepvizError::RenderFailedError {
                command: rendered,
                status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_failure_for_missing_program() {
        let command = RendererCommand::new(PathBuf::from("/nonexistent/renderer"));
        let error = command
            .render(Path::new("graph.mmd"), Path::new("graph.png"))
            .unwrap_err();

        match error {
            DepvizError::RenderLaunchError { command, .. } => {
                assert!(command.starts_with("/nonexistent/renderer -i graph.mmd -o graph.png"));
            }
            other => panic!("Expected RenderLaunchError, got {other:?}"),
        }
    }

    #[cfg(unix)]
    fn fake_renderer(dir: &Path, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-renderer");
        std::fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = fake_renderer(dir.path(), "exit 0");

        let command = RendererCommand::new(renderer).with_dimensions(Some(800), Some(600));
        command
            .render(Path::new("graph.mmd"), Path::new("graph.png"))
            .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_reports_status_and_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = fake_renderer(dir.path(), "echo 'bad diagram' >&2; exit 3");

        let command = RendererCommand::new(renderer);
        let error = command
            .render(Path::new("graph.mmd"), Path::new("graph.png"))
            .unwrap_err();

        match error {
            DepvizError::RenderFailedError {
                status, stderr, ..
            } => {
                assert_eq!(status, "exit code 3");
                assert_eq!(stderr, "bad diagram");
            }
            other => panic!("Expected RenderFailedError, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_dimensions_are_passed_through() {
        let dir = tempfile::tempdir().unwrap();
        // The fake renderer records its arguments for inspection
        let args_file = dir.path().join("args.txt");
        let renderer = fake_renderer(
            dir.path(),
            &format!("echo \"$@\" > {}", args_file.display()),
        );

        let command = RendererCommand::new(renderer).with_dimensions(Some(1024), None);
        command
            .render(Path::new("graph.mmd"), Path::new("graph.png"))
            .unwrap();

        let recorded = std::fs::read_to_string(&args_file).unwrap();
        assert_eq!(recorded.trim(), "-i graph.mmd -o graph.png -w 1024");
    }
}
