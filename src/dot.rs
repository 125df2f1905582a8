//! Dependency graph to DOT (Graphviz) conversion.
//!
//! # DOT Format
//!
//! The generated DOT output follows these conventions:
//! - **Nodes** are catalog functions, labeled with their id and expression
//! - **Edges** point from the source function to the function derived from it,
//!   one edge per connection, labeled with the gate and literal used
//! - **Cycle edges** (edges lying on a reported cycle) are drawn bold and colored
//!
//! # Examples
//!
//! ```
//! use rivest_rs::search::{search, SearchConfig};
//!
//! let report = search(&SearchConfig::default()).unwrap();
//! let dot = report.to_dot().unwrap();
//! assert!(dot.starts_with("digraph {"));
//! // Render with: dot -Tpng graph.dot -o graph.png
//! ```

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::catalog::FunctionId;
use crate::checker::Connection;
use crate::search::Report;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for function nodes (default: "box")
    pub node_shape: &'static str,
    /// Style for regular edges (default: "solid")
    pub edge_style: &'static str,
    /// Color for edges on a reported cycle (default: "red")
    pub cycle_color: &'static str,
    /// Whether to label edges with the gate and literal (default: true)
    pub label_edges: bool,
    /// Whether to merge duplicate edges between the same pair (default: false)
    pub merge_duplicates: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "box",
            edge_style: "solid",
            cycle_color: "red",
            label_edges: true,
            merge_duplicates: false,
        }
    }
}

/// Short gate label for an edge, e.g. `a&` or `~(B|)`.
fn edge_label(connection: &Connection) -> String {
    let op = connection.rule.operator();
    if connection.rule.is_inverting() {
        format!("~({}{})", connection.symbol, op)
    } else {
        format!("{}{}", connection.symbol, op)
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Report {
    /// Converts the dependency graph to DOT format.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the dependency graph to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let cycle_edges: BTreeSet<(FunctionId, FunctionId)> =
            self.cycles.iter().flat_map(|cycle| cycle.edges()).collect();

        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        for function in self.catalog.functions() {
            writeln!(
                dot,
                "{} [label=\"{}\\n{}\"];",
                function.id(),
                function.id(),
                escape(function.source())
            )?;
        }

        let mut drawn: BTreeSet<(FunctionId, FunctionId)> = BTreeSet::new();
        for connection in &self.connections {
            let pair = (connection.source, connection.target);
            if config.merge_duplicates && !drawn.insert(pair) {
                continue;
            }

            let mut attrs = vec![format!("style={}", config.edge_style)];
            if config.label_edges {
                attrs.push(format!("label=\"{}\"", edge_label(connection)));
            }
            if cycle_edges.contains(&pair) {
                attrs.push(format!("color={}", config.cycle_color));
                attrs.push("penwidth=2".to_string());
            }
            writeln!(dot, "{} -> {} [{}];", pair.0, pair.1, attrs.join(", "))?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::search::{search, SearchConfig};

    fn config(functions: &[&str], length: usize) -> SearchConfig {
        SearchConfig {
            symbols: "abAB".to_string(),
            functions: functions.iter().map(|s| s.to_string()).collect(),
            length,
        }
    }

    #[test]
    fn test_dot_nodes_and_edges() {
        let report = search(&config(&["a&b", "a"], 2)).unwrap();
        let dot = report.to_dot().unwrap();
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("f1 [label=\"f1\\na&b\"];"));
        assert!(dot.contains("f2 -> f1 [style=solid, label=\"b&\", color=red, penwidth=2];"));
        assert!(dot.contains("f1 -> f2 [style=solid, label=\"a|\", color=red, penwidth=2];"));
    }

    #[test]
    fn test_dot_merge_duplicates() {
        let report = search(&config(&["a", "a"], 3)).unwrap();
        let raw = report.to_dot().unwrap();
        assert_eq!(raw.matches("f2 -> f1").count(), 2);

        let merged = report
            .to_dot_with_config(&DotConfig {
                merge_duplicates: true,
                label_edges: false,
                ..DotConfig::default()
            })
            .unwrap();
        assert_eq!(merged.matches("f2 -> f1").count(), 1);
        assert!(merged.contains("f2 -> f1 [style=solid];"));
    }
}
