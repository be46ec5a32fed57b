use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::PackageNode;
use crate::extractor::DependencyEntry;
use crate::project::ProjectTree;

/// Builder for constructing dependency graphs
///
/// Creates a directed graph with one node per package id and deduplicated
/// edges. Edges keep their insertion order, which the serializer relies on
/// for reproducible output. Building is total: there are no error conditions.
pub struct DependencyGraphBuilder {
    graph: DiGraph<PackageNode, ()>,
    node_indices: HashMap<String, NodeIndex>,
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Build a graph from a flat dependency list.
    ///
    /// The root node is always present, even for an empty list. Each
    /// dependency contributes one node keyed by its id and one edge from the
    /// root. A duplicate id overwrites the stored version and adds no second
    /// edge.
    pub fn build_package_graph(&mut self, root_id: &str, dependencies: &[DependencyEntry]) {
        let root = self.ensure_node(root_id, None);

        for dependency in dependencies {
            let index = self.ensure_node(&dependency.id, dependency.version.as_deref());
            self.ensure_edge(root, index);
        }
    }

    /// Build a graph from a project-reference tree.
    ///
    /// Adds one edge per parent-to-child relation at every depth of the
    /// tree. Identical edges from different branches (diamond shapes) are
    /// deduplicated.
    pub fn build_project_graph(&mut self, tree: &ProjectTree) {
        let parent = self.ensure_node(&tree.id, tree.version.as_deref());

        for child in &tree.children {
            let index = self.ensure_node(&child.id, child.version.as_deref());
            self.ensure_edge(parent, index);
            self.build_project_graph(child);
        }
    }

    pub fn graph(&self) -> &DiGraph<PackageNode, ()> {
        &self.graph
    }

    // A later occurrence of the same id overwrites the version metadata
    fn ensure_node(&mut self, id: &str, version: Option<&str>) -> NodeIndex {
        match self.node_indices.get(id) {
            Some(&index) => {
                if let Some(version) = version {
                    self.graph[index].version = Some(version.to_string());
                }
                index
            }
            None => {
                let node = PackageNode::new(id).with_version(version.map(str::to_string));
                let index = self.graph.add_node(node);
                self.node_indices.insert(id.to_string(), index);
                index
            }
        }
    }

    fn ensure_edge(&mut self, source: NodeIndex, target: NodeIndex) {
        if self.graph.find_edge(source, target).is_none() {
            self.graph.add_edge(source, target, ());
        }
    }
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
