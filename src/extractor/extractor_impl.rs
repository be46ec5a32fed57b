use std::fs::File;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::manifest::NUSPEC_EXTENSION;
use crate::error::DepvizError;
use crate::nuspec_parser::{self, DependencyEntry};

/// Extracts the declared dependency list from a package archive.
pub struct ManifestExtractor;

impl ManifestExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the dependency list declared by the archive's manifest.
    ///
    /// Fails when the archive is missing or is not a readable zip container.
    /// A missing manifest entry, and a manifest that does not parse, both
    /// degrade to an empty list with a warning event.
    pub fn extract(&self, archive_path: &Path) -> Result<Vec<DependencyEntry>, DepvizError> {
        let file = File::open(archive_path).map_err(|source| DepvizError::FileReadError {
            path: archive_path.to_path_buf(),
            source,
        })?;

        let mut archive =
            zip::ZipArchive::new(file).map_err(|source| DepvizError::ArchiveError {
                path: archive_path.to_path_buf(),
                source,
            })?;

        // Uniquely named and released on every exit path when dropped,
        // including the error returns below.
        let extraction_dir = tempfile::tempdir()?;

        archive
            .extract(extraction_dir.path())
            .map_err(|source| DepvizError::ArchiveError {
                path: archive_path.to_path_buf(),
                source,
            })?;

        let Some(manifest_path) = locate_manifest(extraction_dir.path()) else {
            tracing::warn!(
                archive = %archive_path.display(),
                "no manifest entry found in archive, treating as dependency-free"
            );
            return Ok(Vec::new());
        };

        match nuspec_parser::parse_file(&manifest_path) {
            Ok(entries) => Ok(entries),
            Err(error) => {
                tracing::warn!(
                    archive = %archive_path.display(),
                    %error,
                    "malformed manifest, treating as dependency-free"
                );
                Ok(Vec::new())
            }
        }
    }
}

impl Default for ManifestExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first top-level `.nuspec` entry in the extraction directory.
///
/// Archives carry a single manifest by convention; which one wins when
/// several are present is unspecified.
fn locate_manifest(dir: &Path) -> Option<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|extension| extension.eq_ignore_ascii_case(NUSPEC_EXTENSION))
        })
        .map(|entry| entry.into_path())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_locate_manifest_finds_top_level_nuspec() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("acme.widgets.nuspec"), "<package/>").unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib").join("acme.dll"), b"MZ").unwrap();

        let found = locate_manifest(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "acme.widgets.nuspec");
    }

    #[test]
    fn test_locate_manifest_ignores_nested_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("inner.nuspec"), "<package/>").unwrap();

        assert!(locate_manifest(dir.path()).is_none());
    }

    #[test]
    fn test_extract_missing_archive_is_a_read_error() {
        let extractor = ManifestExtractor::new();
        let error = extractor
            .extract(Path::new("/nonexistent/acme.nupkg"))
            .unwrap_err();

        match error {
            DepvizError::FileReadError { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/acme.nupkg"));
            }
            other => panic!("Expected FileReadError, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_non_zip_file_is_an_archive_error() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("not-a-package.nupkg");
        fs::write(&archive, "plain text, not a zip container").unwrap();

        let extractor = ManifestExtractor::new();
        let error = extractor.extract(&archive).unwrap_err();

        match error {
            DepvizError::ArchiveError { path, .. } => assert_eq!(path, archive),
            other => panic!("Expected ArchiveError, got {other:?}"),
        }
    }
}
