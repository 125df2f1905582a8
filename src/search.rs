//! The search pipeline and its report.
//!
//! ```text
//! catalog -> truth tables -> connections -> graph -> cycles -> report
//! ```
//!
//! The whole configuration is validated before the graph is built, so a run
//! either produces a complete [`Report`] or fails without partial output.

use std::fmt;

use log::info;

use crate::alphabet::{Alphabet, DEFAULT_SYMBOLS};
use crate::catalog::{Catalog, DEFAULT_FUNCTIONS};
use crate::checker::{find_connections, Connection};
use crate::cycles::{distinct_cycles, find_cycles, Cycle};
use crate::error::Error;
use crate::graph::DependencyGraph;

/// Target cycle length of the built-in search.
pub const DEFAULT_LENGTH: usize = 6;

/// Everything a search depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Literal alphabet, e.g. `"abcABC"`.
    pub symbols: String,
    /// Catalog expressions, `functions[k]` becomes `f{k+1}`.
    pub functions: Vec<String>,
    /// Number of functions in a valid cycle.
    pub length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            symbols: DEFAULT_SYMBOLS.to_string(),
            functions: DEFAULT_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
            length: DEFAULT_LENGTH,
        }
    }
}

impl SearchConfig {
    /// Parse the alphabet and the catalog.
    pub fn catalog(&self) -> Result<Catalog, Error> {
        let alphabet = Alphabet::new(&self.symbols)?;
        Catalog::new(alphabet, &self.functions)
    }
}

/// Result of a search.
#[derive(Debug, Clone)]
pub struct Report {
    pub catalog: Catalog,
    pub connections: Vec<Connection>,
    pub graph: DependencyGraph,
    pub cycles: Vec<Cycle>,
    /// Print raw successor lists (with duplicate edges) in the graph section.
    pub keep_duplicates: bool,
}

impl Report {
    /// Cycles up to rotation.
    pub fn distinct_cycles(&self) -> Vec<Cycle> {
        distinct_cycles(&self.cycles)
    }
}

/// Run the search on an already parsed catalog.
pub fn search_catalog(catalog: Catalog, length: usize) -> Result<Report, Error> {
    let connections = find_connections(&catalog)?;
    let graph = DependencyGraph::from_connections(catalog.len(), &connections);
    info!(
        "Dependency graph: {} nodes, {} edges ({} distinct)",
        graph.num_nodes(),
        graph.num_edges(),
        graph.deduplicated().num_edges()
    );

    let cycles = find_cycles(&graph, length);
    info!(
        "Found {} cycles of length {} ({} up to rotation)",
        cycles.len(),
        length,
        distinct_cycles(&cycles).len()
    );

    Ok(Report {
        catalog,
        connections,
        graph,
        cycles,
        keep_duplicates: false,
    })
}

/// Run the full search described by `config`.
pub fn search(config: &SearchConfig) -> Result<Report, Error> {
    let catalog = config.catalog()?;
    info!(
        "Searching {} functions over '{}' for cycles of length {}",
        catalog.len(),
        catalog.alphabet(),
        config.length
    );
    search_catalog(catalog, config.length)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Connections:")?;
        for connection in &self.connections {
            writeln!(f, "{}", connection)?;
        }

        writeln!(f)?;
        writeln!(f, "Valid Cycles")?;
        for cycle in &self.cycles {
            writeln!(f, "{}", cycle)?;
        }

        writeln!(f)?;
        writeln!(f, "Graph")?;
        if self.keep_duplicates {
            write!(f, "{}", self.graph)?;
        } else {
            write!(f, "{}", self.graph.deduplicated())?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::catalog::FunctionId;

    fn config(symbols: &str, functions: &[&str], length: usize) -> SearchConfig {
        SearchConfig {
            symbols: symbols.to_string(),
            functions: functions.iter().map(|s| s.to_string()).collect(),
            length,
        }
    }

    #[test]
    fn test_default_search_is_sound() {
        let report = search(&SearchConfig::default()).unwrap();
        assert_eq!(report.graph.num_nodes(), 8);
        assert_eq!(report.graph.num_edges(), report.connections.len());
        for cycle in &report.cycles {
            assert_eq!(cycle.len(), DEFAULT_LENGTH);
            assert!(cycle.is_valid_in(&report.graph), "{}", cycle);
        }
        // Every rotation of a reported cycle is reported too.
        let distinct = report.distinct_cycles();
        assert_eq!(report.cycles.len(), distinct.len() * DEFAULT_LENGTH);
    }

    #[test]
    fn test_search_is_idempotent() {
        let first = search(&SearchConfig::default()).unwrap().to_string();
        let second = search(&SearchConfig::default()).unwrap().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_sections() {
        // f1 = a & f2, f2 = b | f1
        let report = search(&config("abAB", &["a", "a|b"], 2)).unwrap();
        let text = report.to_string();
        assert!(text.starts_with("\nConnections:\n"));
        let connections = text.find("Connections:").unwrap();
        let cycles = text.find("\nValid Cycles\n").unwrap();
        let graph = text.find("\nGraph\n").unwrap();
        assert!(connections < cycles && cycles < graph);
        assert!(text.contains("f2 = b | f1\n"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_two_cycle() {
        // f1 = b & f2, f2 = a | f1
        let report = search(&config("abAB", &["a&b", "a"], 2)).unwrap();
        let f1 = FunctionId::new(1);
        let f2 = FunctionId::new(2);
        assert!(report.graph.has_edge(f2, f1));
        assert!(report.graph.has_edge(f1, f2));
        assert_eq!(report.cycles.len(), 2);
        assert_eq!(report.cycles[0].to_string(), "[f1, f2]");
        assert_eq!(report.cycles[1].to_string(), "[f2, f1]");
    }

    #[test]
    fn test_graph_section_deduplicates_by_default() {
        // a = a & f2 and a = a | f2: two witnesses for the same edge.
        let mut report = search(&config("abAB", &["a", "a"], 2)).unwrap();
        assert_eq!(report.graph.successors(FunctionId::new(2)).len(), 2);
        assert!(report.to_string().contains("\nf2: [f1]\n"));
        report.keep_duplicates = true;
        assert!(report.to_string().contains("\nf2: [f1, f1]\n"));
    }

    #[test]
    fn test_invalid_config_fails_before_search() {
        assert!(matches!(search(&config("abA", &["a"], 2)), Err(Error::MissingComplement('b'))));
        assert!(matches!(
            search(&config("abAB", &["a", "a&&b"], 2)),
            Err(Error::Catalog { index: 1, .. })
        ));
        assert!(matches!(search(&config("abAB", &[], 2)), Err(Error::EmptyCatalog)));
    }
}
