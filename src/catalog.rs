//! Function catalog.
//!
//! A catalog is the ordered list of candidate functions. Each entry is parsed
//! once, its truth table is computed once, and it is identified by its
//! 1-based position (`f1`, `f2`, ...).
//!
//! Catalog files contain one expression per line. Blank lines and lines
//! starting with `#` are ignored:
//!
//! ```text
//! # f1 and f2
//! b&(A|C)
//! A&b&c
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::alphabet::Alphabet;
use crate::error::Error;
use crate::expr::Expr;
use crate::parser;
use crate::truth_table::TruthTable;

/// Functions of the built-in catalog (over [`DEFAULT_SYMBOLS`](crate::alphabet::DEFAULT_SYMBOLS)).
pub const DEFAULT_FUNCTIONS: [&str; 8] = [
    "b&(A|C)",
    "A&b&c",
    "A|B|c",
    "a|(b&c)",
    "c&(a|B)",
    "c&(a|b)",
    "A|(b&C)",
    "(A&C)|B",
];

/// Identifier of a catalog function (1-indexed).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FunctionId(usize);

impl FunctionId {
    /// Creates a function identifier.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Function IDs must be 1-indexed.
    pub fn new(id: usize) -> Self {
        assert_ne!(id, 0, "Function IDs must be >= 1");
        FunctionId(id)
    }

    /// Identifier of the catalog entry at 0-based position `index`.
    pub fn from_index(index: usize) -> Self {
        FunctionId(index + 1)
    }

    pub fn id(self) -> usize {
        self.0
    }

    /// 0-based catalog position.
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// A parsed catalog entry.
#[derive(Debug, Clone)]
pub struct Function {
    id: FunctionId,
    source: String,
    expr: Expr,
    table: TruthTable,
}

impl Function {
    pub fn id(&self) -> FunctionId {
        self.id
    }

    /// The expression as written in the catalog.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn table(&self) -> &TruthTable {
        &self.table
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    alphabet: Alphabet,
    functions: Vec<Function>,
}

impl Catalog {
    /// Parse and evaluate every expression.
    ///
    /// The first failing entry aborts construction.
    pub fn new<I, S>(alphabet: Alphabet, exprs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut functions = Vec::new();
        for (index, source) in exprs.into_iter().enumerate() {
            let source = source.as_ref().trim();
            let wrap = |error: Error| Error::Catalog {
                index,
                expr: source.to_string(),
                error: Box::new(error),
            };
            let expr = parser::parse(&alphabet, source).map_err(wrap)?;
            let table = TruthTable::from_expr(&alphabet, &expr).map_err(wrap)?;
            let id = FunctionId::from_index(index);
            debug!("{} = {} has table {}", id, source, table);
            functions.push(Function {
                id,
                source: source.to_string(),
                expr,
                table,
            });
        }

        if functions.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        Ok(Catalog { alphabet, functions })
    }

    /// Read a catalog with one expression per line.
    pub fn from_reader<R: Read>(alphabet: Alphabet, reader: R) -> Result<Self, Error> {
        let mut exprs = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            exprs.push(line.to_string());
        }
        Catalog::new(alphabet, exprs)
    }

    pub fn load<P: AsRef<Path>>(alphabet: Alphabet, path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Catalog::from_reader(alphabet, file)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn get(&self, id: FunctionId) -> &Function {
        &self.functions[id.index()]
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn ids(&self) -> impl Iterator<Item = FunctionId> + '_ {
        self.functions.iter().map(|f| f.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::new(Alphabet::default(), DEFAULT_FUNCTIONS).unwrap();
        assert_eq!(catalog.len(), 8);
        let ids: Vec<String> = catalog.ids().map(|id| id.to_string()).collect();
        assert_eq!(ids, ["f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8"]);
        let f2 = catalog.get(FunctionId::new(2));
        assert_eq!(f2.source(), "A&b&c");
        assert_eq!(f2.table().to_string(), "00000010");
    }

    #[test]
    fn test_function_id_indexing() {
        let id = FunctionId::from_index(4);
        assert_eq!(id.id(), 5);
        assert_eq!(id.index(), 4);
        assert_eq!(id.to_string(), "f5");
    }

    #[test]
    fn test_from_reader_skips_comments() {
        let text = "# two functions\n\na&b\n  A|B  \n# done\n";
        let catalog = Catalog::from_reader(Alphabet::new("abAB").unwrap(), text.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(FunctionId::new(2)).source(), "A|B");
    }

    #[test]
    fn test_bad_entry_is_reported_with_position() {
        let err = Catalog::new(Alphabet::new("abAB").unwrap(), ["a", "a&c"]).unwrap_err();
        match err {
            Error::Catalog { index, expr, error } => {
                assert_eq!(index, 1);
                assert_eq!(expr, "a&c");
                assert!(matches!(*error, Error::UnknownSymbol { symbol: 'c', .. }));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let empty: [&str; 0] = [];
        assert!(matches!(Catalog::new(Alphabet::default(), empty), Err(Error::EmptyCatalog)));
    }
}
