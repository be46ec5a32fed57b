use std::path::{Path, PathBuf};

use super::ProjectTree;
use crate::csproj_parser;
use crate::error::DepvizError;
use crate::utils::path::artifact_stem;

/// Walks `ProjectReference` chains from a root project file.
///
/// The visit stack holds the canonical paths of the projects currently being
/// walked, so re-entering one of them means the references form a loop.
/// Projects reachable through several distinct branches (diamond shapes) are
/// legal and simply walked once per branch; the graph builder deduplicates
/// the resulting edges.
pub struct ProjectWalker {
    stack: Vec<PathBuf>,
}

impl ProjectWalker {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Walk the project file and everything reachable from it into a tree.
    pub fn walk(&mut self, project_path: &Path) -> Result<ProjectTree, DepvizError> {
        let canonical =
            project_path
                .canonicalize()
                .map_err(|source| DepvizError::FileReadError {
                    path: project_path.to_path_buf(),
                    source,
                })?;

        if self.stack.contains(&canonical) {
            return Err(DepvizError::ProjectCycleError { path: canonical });
        }

        tracing::debug!(project = %canonical.display(), "walking project references");

        let manifest = csproj_parser::parse_file(&canonical)?;
        let base = canonical.parent().unwrap_or(Path::new("."));

        self.stack.push(canonical.clone());

        let mut children = Vec::new();
        for package in manifest.package_references {
            children.push(ProjectTree {
                id: package.id,
                version: package.version,
                children: Vec::new(),
            });
        }
        for reference in &manifest.project_references {
            // Include paths conventionally use Windows separators
            let relative = reference.replace('\\', "/");
            match self.walk(&base.join(relative)) {
                Ok(child) => children.push(child),
                Err(error) => {
                    self.stack.pop();
                    return Err(error);
                }
            }
        }

        self.stack.pop();

        Ok(ProjectTree {
            id: artifact_stem(&canonical),
            version: None,
            children,
        })
    }
}

impl Default for ProjectWalker {
    fn default() -> Self {
        Self::new()
    }
}
