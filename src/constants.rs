//! Configuration constants for depviz
//!
//! This module contains the fixed values used throughout the application:
//! the diagram syntax, manifest naming conventions, and progress display
//! configuration.

use std::time::Duration;

/// Diagram serialization configuration
pub mod diagram {
    /// Header line opening every generated flow diagram
    pub const MERMAID_HEADER: &str = "graph TD;";

    /// Default file name for the intermediate diagram text
    pub const DEFAULT_DIAGRAM_FILE: &str = "graph.mmd";
}

/// Manifest naming conventions
pub mod manifest {
    /// Extension of the manifest entry inside a package archive
    pub const NUSPEC_EXTENSION: &str = "nuspec";
}

/// Progress display configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while extracting or rendering
    pub const SPINNER_FRAMES: &[&str] = &["▹▹▹▹", "▸▹▹▹", "▹▸▹▹", "▹▹▸▹", "▹▹▹▸", "✓"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_constants() {
        assert_eq!(diagram::MERMAID_HEADER, "graph TD;");
        assert!(diagram::DEFAULT_DIAGRAM_FILE.ends_with(".mmd"));
    }

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert!(!progress::SPINNER_FRAMES.is_empty());
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }
}
