use std::path::Path;

use crate::error::DepvizError;

/// A single declared dependency from a package manifest.
///
/// Identity is the `id`; the version is informational metadata only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    pub id: String,
    pub version: Option<String>,
}

/// Parse a `.nuspec` manifest file into its declared dependency list.
pub fn parse_file(path: &Path) -> Result<Vec<DependencyEntry>, DepvizError> {
    let content = std::fs::read_to_string(path).map_err(|source| DepvizError::FileReadError {
        path: path.to_path_buf(),
        source,
    })?;

    parse_str(&content, &path.display().to_string())
}

/// Parse manifest XML into its declared dependency list.
///
/// Manifests have shipped both with a packaging namespace and without one
/// across schema versions; the namespace declared on the document root (if
/// any) is the one used to locate elements. The `dependencies` element may
/// sit anywhere in the document, and `dependency` entries may be wrapped in
/// per-framework `group` elements. Entries without an `id` attribute carry no
/// identity and are skipped.
pub fn parse_str(content: &str, origin: &str) -> Result<Vec<DependencyEntry>, DepvizError> {
    let document =
        roxmltree::Document::parse(content).map_err(|source| DepvizError::ManifestParseError {
            file: origin.to_string(),
            source,
        })?;

    let namespace = document.root_element().tag_name().namespace();

    let Some(dependencies) = document
        .descendants()
        .find(|node| is_named(node, "dependencies", namespace))
    else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::new();
    for node in dependencies
        .descendants()
        .filter(|node| is_named(node, "dependency", namespace))
    {
        let Some(id) = node.attribute("id") else {
            continue;
        };
        // The `exclude` attribute is ignored
        entries.push(DependencyEntry {
            id: id.to_string(),
            version: node.attribute("version").map(str::to_string),
        });
    }

    Ok(entries)
}

fn is_named(node: &roxmltree::Node<'_, '_>, name: &str, namespace: Option<&str>) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == namespace
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const UNNAMESPACED: &str = r#"<?xml version="1.0"?>
<package>
  <metadata>
    <id>acme.widgets</id>
    <version>1.2.0</version>
    <dependencies>
      <dependency id="dep1" version="1.0" />
      <dependency id="dep2" version="2.0" />
    </dependencies>
  </metadata>
</package>"#;

    const NAMESPACED: &str = r#"<?xml version="1.0"?>
<package xmlns="http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd">
  <metadata>
    <id>acme.widgets</id>
    <version>1.2.0</version>
    <dependencies>
      <dependency id="dep1" version="1.0" />
      <dependency id="dep2" version="2.0" />
    </dependencies>
  </metadata>
</package>"#;

    #[test]
    fn test_parse_unnamespaced_manifest() {
        let entries = parse_str(UNNAMESPACED, "test.nuspec").unwrap();

        assert_eq!(
            entries,
            vec![
                DependencyEntry {
                    id: "dep1".to_string(),
                    version: Some("1.0".to_string()),
                },
                DependencyEntry {
                    id: "dep2".to_string(),
                    version: Some("2.0".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_namespaced_and_unnamespaced_yield_identical_lists() {
        let plain = parse_str(UNNAMESPACED, "plain.nuspec").unwrap();
        let namespaced = parse_str(NAMESPACED, "namespaced.nuspec").unwrap();

        assert_eq!(plain, namespaced);
    }

    #[test]
    fn test_missing_id_is_skipped() {
        let manifest = r#"<package>
  <metadata>
    <dependencies>
      <dependency version="1.0" />
      <dependency id="kept" />
    </dependencies>
  </metadata>
</package>"#;

        let entries = parse_str(manifest, "test.nuspec").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "kept");
        assert_eq!(entries[0].version, None);
    }

    #[test]
    fn test_exclude_attribute_is_ignored() {
        let manifest = r#"<package>
  <metadata>
    <dependencies>
      <dependency id="dep1" version="1.0" exclude="Build,Analyzers" />
    </dependencies>
  </metadata>
</package>"#;

        let entries = parse_str(manifest, "test.nuspec").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "dep1");
    }

    #[test]
    fn test_group_wrapped_dependencies_are_collected() {
        let manifest = r#"<package xmlns="http://schemas.microsoft.com/packaging/2013/01/nuspec.xsd">
  <metadata>
    <dependencies>
      <group targetFramework="net6.0">
        <dependency id="dep1" version="1.0" />
      </group>
      <group targetFramework="netstandard2.0">
        <dependency id="dep2" version="2.0" />
      </group>
    </dependencies>
  </metadata>
</package>"#;

        let entries = parse_str(manifest, "test.nuspec").unwrap();

        let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["dep1", "dep2"]);
    }

    #[test]
    fn test_no_dependencies_element_yields_empty_list() {
        let manifest = r#"<package>
  <metadata>
    <id>standalone</id>
    <version>0.1.0</version>
  </metadata>
</package>"#;

        let entries = parse_str(manifest, "test.nuspec").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_preserved_in_document_order() {
        // Deduplication is the graph builder's job, not the parser's
        let manifest = r#"<package>
  <metadata>
    <dependencies>
      <dependency id="dep1" version="1.0" />
      <dependency id="dep1" version="2.0" />
    </dependencies>
  </metadata>
</package>"#;

        let entries = parse_str(manifest, "test.nuspec").unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].version, Some("1.0".to_string()));
        assert_eq!(entries[1].version, Some("2.0".to_string()));
    }

    #[test]
    fn test_malformed_xml_is_a_parse_error() {
        let error = parse_str("<package><metadata>", "broken.nuspec").unwrap_err();

        match error {
            DepvizError::ManifestParseError { file, .. } => assert_eq!(file, "broken.nuspec"),
            other => panic!("Expected ManifestParseError, got {other:?}"),
        }
    }
}
