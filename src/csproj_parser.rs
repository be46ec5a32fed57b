use std::path::Path;

use crate::error::DepvizError;

/// A `PackageReference` entry from a project file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    pub id: String,
    pub version: Option<String>,
}

/// Parsed contents of a `.csproj` file.
#[derive(Debug, Clone, Default)]
pub struct ProjectManifest {
    pub package_references: Vec<PackageReference>,
    /// Raw `Include` paths of `ProjectReference` entries, relative to the
    /// project file's directory. May use Windows path separators.
    pub project_references: Vec<String>,
}

/// Parse a `.csproj` project file.
///
/// Unlike a package manifest, a malformed project file is fatal: it is an
/// input the operator named (or one reachable from it), not an opaque archive
/// member.
pub fn parse_file(path: &Path) -> Result<ProjectManifest, DepvizError> {
    let content = std::fs::read_to_string(path).map_err(|source| DepvizError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    parse_str(&content, &path.display().to_string())
}

/// Parse project-file XML.
///
/// Legacy project files declare the MSBuild 2003 namespace; SDK-style
/// projects declare none. The namespace on the document root decides which
/// form the reference elements are looked up in. Entries missing their
/// `Include` attribute are skipped.
pub fn parse_str(content: &str, origin: &str) -> Result<ProjectManifest, DepvizError> {
    let document =
        roxmltree::Document::parse(content).map_err(|source| DepvizError::ManifestParseError {
            file: origin.to_string(),
            source,
        })?;

    let namespace = document.root_element().tag_name().namespace();
    let mut manifest = ProjectManifest::default();

    for node in document.descendants().filter(|node| node.is_element()) {
        if node.tag_name().namespace() != namespace {
            continue;
        }

        match node.tag_name().name() {
            "PackageReference" => {
                let Some(id) = node.attribute("Include") else {
                    continue;
                };
                manifest.package_references.push(PackageReference {
                    id: id.to_string(),
                    version: package_version(&node, namespace),
                });
            }
            "ProjectReference" => {
                let Some(include) = node.attribute("Include") else {
                    continue;
                };
                manifest.project_references.push(include.to_string());
            }
            _ => {}
        }
    }

    Ok(manifest)
}

// The version appears as an attribute on SDK-style references and as a child
// element on legacy ones.
fn package_version(node: &roxmltree::Node<'_, '_>, namespace: Option<&str>) -> Option<String> {
    if let Some(version) = node.attribute("Version") {
        return Some(version.to_string());
    }

    node.children()
        .find(|child| {
            child.is_element()
                && child.tag_name().name() == "Version"
                && child.tag_name().namespace() == namespace
        })
        .and_then(|child| child.text())
        .map(|text| text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_sdk_style_project() {
        let project = r#"<Project Sdk="Microsoft.NET.Sdk">
  <ItemGroup>
    <PackageReference Include="Newtonsoft.Json" Version="13.0.3" />
    <PackageReference Include="Serilog" Version="3.1.1" />
    <ProjectReference Include="..\Lib\Lib.csproj" />
  </ItemGroup>
</Project>"#;

        let manifest = parse_str(project, "App.csproj").unwrap();

        assert_eq!(
            manifest.package_references,
            vec![
                PackageReference {
                    id: "Newtonsoft.Json".to_string(),
                    version: Some("13.0.3".to_string()),
                },
                PackageReference {
                    id: "Serilog".to_string(),
                    version: Some("3.1.1".to_string()),
                },
            ]
        );
        assert_eq!(manifest.project_references, vec![r"..\Lib\Lib.csproj"]);
    }

    #[test]
    fn test_parse_legacy_namespaced_project() {
        let project = r#"<Project xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <PackageReference Include="Newtonsoft.Json">
      <Version>12.0.1</Version>
    </PackageReference>
    <ProjectReference Include="..\Lib\Lib.csproj" />
  </ItemGroup>
</Project>"#;

        let manifest = parse_str(project, "App.csproj").unwrap();

        assert_eq!(manifest.package_references.len(), 1);
        assert_eq!(manifest.package_references[0].id, "Newtonsoft.Json");
        assert_eq!(
            manifest.package_references[0].version,
            Some("12.0.1".to_string())
        );
        assert_eq!(manifest.project_references.len(), 1);
    }

    #[test]
    fn test_reference_without_include_is_skipped() {
        let project = r#"<Project Sdk="Microsoft.NET.Sdk">
  <ItemGroup>
    <PackageReference Version="1.0.0" />
    <ProjectReference />
  </ItemGroup>
</Project>"#;

        let manifest = parse_str(project, "App.csproj").unwrap();

        assert!(manifest.package_references.is_empty());
        assert!(manifest.project_references.is_empty());
    }

    #[test]
    fn test_project_without_item_groups() {
        let project = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
  </PropertyGroup>
</Project>"#;

        let manifest = parse_str(project, "App.csproj").unwrap();

        assert!(manifest.package_references.is_empty());
        assert!(manifest.project_references.is_empty());
    }

    #[test]
    fn test_malformed_project_is_a_parse_error() {
        let error = parse_str("<Project><ItemGroup>", "App.csproj").unwrap_err();

        match error {
            DepvizError::ManifestParseError { file, .. } => assert_eq!(file, "App.csproj"),
            other => panic!("Expected ManifestParseError, got {other:?}"),
        }
    }
}
