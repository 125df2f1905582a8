//! # rivest-rs: search for cyclic (Rivest) circuits
//!
//! A *cyclic circuit* wires gates in a closed loop instead of a feed-forward DAG.
//! Given a catalog of boolean functions over `n` variables and their complements,
//! this crate looks for loops of gates where every function is computed from
//! the previous one by a single AND, OR, NAND or NOR gate with a single literal.
//!
//! ## Pipeline
//!
//! 1. Every catalog expression is parsed into an [`Expr`][crate::expr::Expr] tree
//!    and evaluated into a [`TruthTable`][crate::truth_table::TruthTable].
//! 2. For every ordered pair of functions `(f_i, f_j)`, every literal `s` and every
//!    gate, the [`checker`] tests whether `f_i == gate(s, f_j)` by truth table.
//!    Each match is an edge `f_j -> f_i` in the [`DependencyGraph`][crate::graph::DependencyGraph].
//! 3. The [`cycles`] module enumerates all simple cycles of a fixed length.
//!
//! ## Basic Usage
//!
//! ```rust
//! use rivest_rs::search::{search, SearchConfig};
//!
//! let config = SearchConfig {
//!     symbols: "abAB".to_string(),
//!     functions: vec!["a&b".to_string(), "a".to_string()],
//!     length: 2,
//! };
//! let report = search(&config).unwrap();
//!
//! // f1 = b & f2 and f2 = a | f1 close a loop of two gates.
//! assert_eq!(report.cycles.len(), 2);
//! println!("{}", report);
//! ```
//!
//! ## Core Components
//!
//! - **[`search`]**: Configuration, the pipeline, and the textual report.
//! - **[`checker`]**: Derivation of one function from another.
//! - **[`cycles`]**: Fixed-length cycle enumeration.
//! - **[`dot`]**: Graphviz rendering of the dependency graph.

pub mod alphabet;
pub mod catalog;
pub mod checker;
pub mod cycles;
pub mod dot;
pub mod error;
pub mod expr;
pub mod gate;
pub mod graph;
pub mod parser;
pub mod search;
pub mod truth_table;
pub mod types;
