//! Connection checker.
//!
//! Function `i` is *connected* to function `j` when `f_i` equals one of
//!
//! ```text
//! s & f_j     s | f_j     ~(s & f_j)     ~(s | f_j)
//! ```
//!
//! for some literal `s`, compared by truth table over all assignments.
//! Every ordered pair `(i, j)` with `i != j` is checked, every literal of the
//! alphabet (both polarities) is tried, and every match is kept, so the same
//! pair may be connected by several witnesses.

use std::fmt;

use log::{debug, info};

use crate::catalog::{Catalog, FunctionId};
use crate::error::Error;
use crate::gate::Rule;
use crate::truth_table::TruthTable;
use crate::types::Lit;

/// A verified derivation `target = rule(symbol, source)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Connection {
    pub target: FunctionId,
    pub source: FunctionId,
    pub rule: Rule,
    pub lit: Lit,
    /// Alphabet symbol of `lit`.
    pub symbol: char,
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.rule.operator();
        if self.rule.is_inverting() {
            write!(f, "{} = ~({} {} {})", self.target, self.symbol, op, self.source)
        } else {
            write!(f, "{} = {} {} {}", self.target, self.symbol, op, self.source)
        }
    }
}

/// Truth table of the gate `rule(lit, source)`.
pub fn derive(catalog: &Catalog, source: FunctionId, rule: Rule, lit: Lit) -> Result<TruthTable, Error> {
    let candidate = rule.apply(lit, catalog.get(source).expr());
    TruthTable::from_expr(catalog.alphabet(), &candidate)
}

/// All connections deriving `target` from `source`, in literal-then-rule order.
pub fn check_pair(catalog: &Catalog, target: FunctionId, source: FunctionId) -> Result<Vec<Connection>, Error> {
    let expected = catalog.get(target).table();
    let mut found = Vec::new();

    for (symbol, lit) in catalog.alphabet().literals() {
        for rule in Rule::ALL {
            if derive(catalog, source, rule, lit)? == *expected {
                let connection = Connection {
                    target,
                    source,
                    rule,
                    lit,
                    symbol,
                };
                debug!("found {} ({} with '{}')", connection, rule, symbol);
                found.push(connection);
            }
        }
    }

    Ok(found)
}

/// Check every ordered pair of distinct catalog functions.
///
/// Pairs are visited with the target in the outer loop and the source in the
/// inner loop, both in catalog order.
pub fn find_connections(catalog: &Catalog) -> Result<Vec<Connection>, Error> {
    let mut connections = Vec::new();
    for target in catalog.ids() {
        for source in catalog.ids() {
            if target == source {
                continue;
            }
            connections.extend(check_pair(catalog, target, source)?);
        }
    }
    info!(
        "Checked {} ordered pairs, found {} connections",
        catalog.len() * (catalog.len() - 1),
        connections.len()
    );
    Ok(connections)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::alphabet::Alphabet;
    use crate::catalog::DEFAULT_FUNCTIONS;

    fn small(exprs: &[&str]) -> Catalog {
        Catalog::new(Alphabet::new("abAB").unwrap(), exprs).unwrap()
    }

    fn id(n: usize) -> FunctionId {
        FunctionId::new(n)
    }

    #[test]
    fn test_negative_fixture() {
        // f1 = a&b (0001), B | f1 = 1101, f2 = a (0101).
        let catalog = small(&["a&b", "a", "A|B"]);
        let nb = catalog.alphabet().lookup('B').unwrap();
        let derived = derive(&catalog, id(1), Rule::Or, nb).unwrap();
        assert_eq!(derived.to_string(), "1101");
        assert_eq!(derived, TruthTable::parse(catalog.alphabet(), "B|a&b").unwrap());
        assert_ne!(derived, *catalog.get(id(2)).table());

        let found = check_pair(&catalog, id(2), id(1)).unwrap();
        assert!(found.iter().all(|c| !(c.rule == Rule::Or && c.symbol == 'B')));
    }

    #[test]
    fn test_positive_fixture() {
        let catalog = small(&["a", "a|b"]);
        let b = catalog.alphabet().lookup('b').unwrap();
        let derived = derive(&catalog, id(1), Rule::Or, b).unwrap();
        assert_eq!(derived.to_string(), "0111");
        assert_eq!(derived, *catalog.get(id(2)).table());

        let found = check_pair(&catalog, id(2), id(1)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rule, Rule::Or);
        assert_eq!(found[0].symbol, 'b');
        assert_eq!(found[0].to_string(), "f2 = b | f1");
    }

    #[test]
    fn test_inverting_connections() {
        // ~(a & (A|B)) = ~(a&B) = A|b
        let catalog = small(&["A|B", "A|b"]);
        let found = check_pair(&catalog, id(2), id(1)).unwrap();
        assert!(found.iter().any(|c| c.rule == Rule::Nand && c.symbol == 'a'));
        let nand = found.iter().find(|c| c.rule == Rule::Nand).unwrap();
        assert_eq!(nand.to_string(), "f2 = ~(a & f1)");
    }

    #[test]
    fn test_every_connection_round_trips() {
        let catalog = Catalog::new(Alphabet::default(), DEFAULT_FUNCTIONS).unwrap();
        let connections = find_connections(&catalog).unwrap();
        assert!(!connections.is_empty());
        for c in &connections {
            assert_ne!(c.target, c.source);
            assert_eq!(catalog.alphabet().lookup(c.symbol), Some(c.lit));
            let table = derive(&catalog, c.source, c.rule, c.lit).unwrap();
            assert_eq!(table, *catalog.get(c.target).table(), "{}", c);
        }
    }

    #[test]
    fn test_no_self_connections() {
        let catalog = small(&["a", "a"]);
        let connections = find_connections(&catalog).unwrap();
        // a = a & a (twice: f1 from f2 and f2 from f1), a = a | a likewise.
        assert!(connections.iter().all(|c| c.target != c.source));
        assert_eq!(connections.len(), 4);
    }
}
