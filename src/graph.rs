//! Dependency graph between catalog functions.
//!
//! An edge `j -> i` means `f_i` is derived from `f_j` by a single gate with a
//! single literal. Successor lists keep insertion order and keep one entry
//! per witness, so a pair connected by several `(literal, rule)` witnesses
//! appears several times.

use std::fmt;

use crate::catalog::FunctionId;
use crate::checker::Connection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    /// `successors[j]` lists the targets derivable from `f_{j+1}`.
    successors: Vec<Vec<FunctionId>>,
}

impl DependencyGraph {
    /// Graph over `n` functions with no edges.
    pub fn new(n: usize) -> Self {
        DependencyGraph {
            successors: vec![Vec::new(); n],
        }
    }

    /// Graph over `n` functions with one edge per connection, in order.
    pub fn from_connections<'a>(n: usize, connections: impl IntoIterator<Item = &'a Connection>) -> Self {
        let mut graph = DependencyGraph::new(n);
        for c in connections {
            graph.add_edge(c.source, c.target);
        }
        graph
    }

    /// Records that `target` is derivable from `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a node of this graph.
    pub fn add_edge(&mut self, source: FunctionId, target: FunctionId) {
        self.successors[source.index()].push(target);
    }

    pub fn num_nodes(&self) -> usize {
        self.successors.len()
    }

    /// Number of edges, counting duplicates.
    pub fn num_edges(&self) -> usize {
        self.successors.iter().map(|s| s.len()).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = FunctionId> {
        (0..self.successors.len()).map(FunctionId::from_index)
    }

    /// Targets derivable from `node`, with duplicates, in insertion order.
    pub fn successors(&self, node: FunctionId) -> &[FunctionId] {
        &self.successors[node.index()]
    }

    /// Targets derivable from `node`, each once, in first-insertion order.
    pub fn unique_successors(&self, node: FunctionId) -> Vec<FunctionId> {
        let mut unique = Vec::new();
        for &next in self.successors(node) {
            if !unique.contains(&next) {
                unique.push(next);
            }
        }
        unique
    }

    pub fn has_edge(&self, source: FunctionId, target: FunctionId) -> bool {
        self.successors(source).contains(&target)
    }

    /// Copy of this graph with duplicate edges removed.
    pub fn deduplicated(&self) -> Self {
        DependencyGraph {
            successors: self.nodes().map(|node| self.unique_successors(node)).collect(),
        }
    }
}

/// One `fN: [..]` line per node.
impl fmt::Display for DependencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            write!(f, "{}: [", node)?;
            for (i, next) in self.successors(node).iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", next)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
