//! Path manipulation utilities

use std::path::Path;

/// Derive an artifact identifier from its file path: the final path
/// component with the extension stripped.
pub fn artifact_stem(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
