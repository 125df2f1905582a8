//! Enumeration of fixed-length cycles in the dependency graph.
//!
//! A valid cycle of length `L` is a path of `L` distinct functions with an
//! edge between every consecutive pair and a closing edge from the last
//! function back to the first. Closure is checked only at exactly `L`:
//! shorter cycles through the same nodes are not reported.
//!
//! Every node is used as a start, so the same circuit is reported once per
//! rotation. Use [`Cycle::canonical`] to compare cycles up to rotation.
//!
//! # Example
//!
//! ```
//! use rivest_rs::catalog::FunctionId;
//! use rivest_rs::cycles::find_cycles;
//! use rivest_rs::graph::DependencyGraph;
//!
//! let id = FunctionId::new;
//! let mut graph = DependencyGraph::new(3);
//! graph.add_edge(id(1), id(2));
//! graph.add_edge(id(2), id(3));
//! graph.add_edge(id(3), id(1));
//!
//! let cycles = find_cycles(&graph, 3);
//! assert_eq!(cycles.len(), 3); // one per rotation
//! assert_eq!(cycles[0].to_string(), "[f1, f2, f3]");
//! ```

use std::fmt;

use crate::catalog::FunctionId;
use crate::graph::DependencyGraph;

/// A closed path of distinct functions, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cycle(Vec<FunctionId>);

impl Cycle {
    pub fn new(nodes: Vec<FunctionId>) -> Self {
        Cycle(nodes)
    }

    pub fn nodes(&self) -> &[FunctionId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive pairs, including the closing pair `(last, first)`.
    pub fn edges(&self) -> impl Iterator<Item = (FunctionId, FunctionId)> + '_ {
        let n = self.0.len();
        (0..n).map(move |i| (self.0[i], self.0[(i + 1) % n]))
    }

    /// Rotation of this cycle that starts at its smallest function.
    pub fn canonical(&self) -> Cycle {
        let Some(start) = (0..self.0.len()).min_by_key(|&i| self.0[i]) else {
            return self.clone();
        };
        let mut nodes = self.0.clone();
        nodes.rotate_left(start);
        Cycle(nodes)
    }

    /// Whether all nodes are distinct and every edge (including the closing one) exists in `graph`.
    pub fn is_valid_in(&self, graph: &DependencyGraph) -> bool {
        let distinct = self.0.iter().enumerate().all(|(i, id)| !self.0[..i].contains(id));
        distinct && !self.0.is_empty() && self.edges().all(|(from, to)| graph.has_edge(from, to))
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "]")
    }
}

/// All valid cycles of exactly `length` functions, in discovery order.
pub fn find_cycles(graph: &DependencyGraph, length: usize) -> Vec<Cycle> {
    CycleSearch::new(graph, length).collect()
}

/// Keep one rotation of each cycle, in first-discovery order.
pub fn distinct_cycles(cycles: &[Cycle]) -> Vec<Cycle> {
    let mut seen: Vec<Cycle> = Vec::new();
    for cycle in cycles {
        let canonical = cycle.canonical();
        if !seen.contains(&canonical) {
            seen.push(canonical);
        }
    }
    seen
}

/// Frame on the exploration stack.
#[derive(Debug)]
struct StackFrame {
    /// Successors of the node at this depth, duplicates removed.
    successors: Vec<FunctionId>,
    /// Index of the next successor to try.
    next: usize,
}

/// Depth-first iterator over valid cycles.
///
/// Every start node begins with a fresh single-node path. The current path is
/// a single vector that grows and shrinks with the stack.
pub struct CycleSearch<'a> {
    graph: &'a DependencyGraph,
    length: usize,
    /// Start nodes not yet explored.
    starts: std::vec::IntoIter<FunctionId>,
    stack: Vec<StackFrame>,
    path: Vec<FunctionId>,
    on_path: Vec<bool>,
}

impl<'a> CycleSearch<'a> {
    pub fn new(graph: &'a DependencyGraph, length: usize) -> Self {
        let starts: Vec<FunctionId> = if length == 0 { Vec::new() } else { graph.nodes().collect() };
        CycleSearch {
            graph,
            length,
            starts: starts.into_iter(),
            stack: Vec::new(),
            path: Vec::with_capacity(length),
            on_path: vec![false; graph.num_nodes()],
        }
    }

    /// Extend the path by `node`.
    ///
    /// At the target length the node is checked for closure and immediately
    /// retracted, returning the cycle if it closes. Otherwise a frame is
    /// pushed so its successors get explored.
    fn enter(&mut self, node: FunctionId) -> Option<Cycle> {
        self.path.push(node);
        self.on_path[node.index()] = true;

        if self.path.len() == self.length {
            let first = self.path[0];
            let found = if self.graph.has_edge(node, first) {
                Some(Cycle(self.path.clone()))
            } else {
                None
            };
            self.leave();
            return found;
        }

        self.stack.push(StackFrame {
            successors: self.graph.unique_successors(node),
            next: 0,
        });
        None
    }

    fn leave(&mut self) {
        if let Some(node) = self.path.pop() {
            self.on_path[node.index()] = false;
        }
    }
}

impl Iterator for CycleSearch<'_> {
    type Item = Cycle;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                // Fresh path for every start node.
                debug_assert!(self.path.is_empty());
                let start = self.starts.next()?;
                if let Some(cycle) = self.enter(start) {
                    return Some(cycle);
                }
                continue;
            };

            if frame.next < frame.successors.len() {
                let next = frame.successors[frame.next];
                frame.next += 1;
                if self.on_path[next.index()] {
                    continue;
                }
                if let Some(cycle) = self.enter(next) {
                    return Some(cycle);
                }
            } else {
                self.stack.pop();
                self.leave();
            }
        }
    }
}
