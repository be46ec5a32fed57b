use std::io::Write;

use miette::Result;
use petgraph::graph::DiGraph;

use crate::constants::diagram::MERMAID_HEADER;
use crate::error::DepvizError;
use crate::graph::PackageNode;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DepvizError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DepvizError::from)
    };
}

/// Serializes dependency graphs as Mermaid flow-diagram text.
///
/// Output is stable: the same graph with the same edge insertion order
/// produces byte-identical text. Node ids are emitted verbatim, and only
/// edges produce lines — an isolated node (a root with no dependencies)
/// leaves the diagram body empty.
pub struct DiagramRenderer;

impl DiagramRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_mermaid(
        &self,
        graph: &DiGraph<PackageNode, ()>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "{MERMAID_HEADER}")?;

        for edge in graph.edge_indices() {
            let (source, target) =
                graph
                    .edge_endpoints(edge)
                    .ok_or_else(|| DepvizError::GraphError {
                        message: "Edge must have endpoints".to_string(),
                    })?;

            writeln_out!(output, "    {} --> {};", graph[source].id, graph[target].id)?;
        }

        Ok(())
    }
}

impl Default for DiagramRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(graph: &DiGraph<PackageNode, ()>) -> String {
        let renderer = DiagramRenderer::new();
        let mut output = Vec::new();
        renderer.render_mermaid(graph, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_empty_graph_renders_only_the_header() {
        let graph = DiGraph::new();
        assert_eq!(render(&graph), "graph TD;\n");
    }

    #[test]
    fn test_isolated_nodes_produce_no_lines() {
        let mut graph = DiGraph::new();
        graph.add_node(PackageNode::new("root"));

        assert_eq!(render(&graph), "graph TD;\n");
    }

    #[test]
    fn test_edges_render_in_insertion_order() {
        let mut graph = DiGraph::new();
        let root = graph.add_node(PackageNode::new("root"));
        let zeta = graph.add_node(PackageNode::new("zeta"));
        let alpha = graph.add_node(PackageNode::new("alpha"));
        graph.add_edge(root, zeta, ());
        graph.add_edge(root, alpha, ());

        assert_eq!(
            render(&graph),
            "graph TD;\n    root --> zeta;\n    root --> alpha;\n"
        );
    }
}
