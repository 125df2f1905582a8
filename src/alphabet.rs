//! Literal alphabet.
//!
//! An alphabet is an ordered string of ASCII letters where a lowercase letter
//! is a variable and the matching uppercase letter is its complement.
//! Variables are numbered by the first appearance of their lowercase letter,
//! so `"abcABC"` numbers `a=x1, b=x2, c=x3` while `"CBAcba"` numbers
//! `c=x1, b=x2, a=x3`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::types::{Lit, Var};

/// Symbols of the built-in catalog.
pub const DEFAULT_SYMBOLS: &str = "abcABC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Symbols in the order literals are tried by the connection checker.
    symbols: Vec<char>,
    /// Lowercase variable names, `vars[k]` is variable `k + 1`.
    vars: Vec<char>,
}

impl Alphabet {
    /// Maximum number of variables (the truth table has `2^MAX_VARS` rows).
    pub const MAX_VARS: usize = 16;

    pub fn new(symbols: &str) -> Result<Self, Error> {
        let symbols: Vec<char> = symbols.chars().filter(|c| !c.is_whitespace()).collect();

        let mut vars: Vec<char> = Vec::new();
        for (i, &c) in symbols.iter().enumerate() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidSymbol(c));
            }
            if symbols[..i].contains(&c) {
                return Err(Error::DuplicateSymbol(c));
            }
            let partner = complement_char(c);
            if !symbols.contains(&partner) {
                return Err(Error::MissingComplement(c));
            }
            let name = c.to_ascii_lowercase();
            if !vars.contains(&name) {
                vars.push(name);
            }
        }

        if vars.len() > Self::MAX_VARS {
            return Err(Error::TooManyVariables {
                count: vars.len(),
                max: Self::MAX_VARS,
            });
        }

        Ok(Alphabet { symbols, vars })
    }

    /// Number of underlying variables (half the number of symbols).
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Number of rows in a truth table over this alphabet.
    pub fn num_assignments(&self) -> usize {
        1 << self.vars.len()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Literal denoted by `symbol`, if it belongs to the alphabet.
    pub fn lookup(&self, symbol: char) -> Option<Lit> {
        if !self.symbols.contains(&symbol) {
            return None;
        }
        let index = self.vars.iter().position(|&v| v == symbol.to_ascii_lowercase())?;
        let var = Var::new(index as u32 + 1);
        if symbol.is_ascii_lowercase() {
            Some(Lit::positive(var))
        } else {
            Some(Lit::negative(var))
        }
    }

    /// Symbol denoting `lit`.
    ///
    /// # Panics
    ///
    /// Panics if the literal's variable is out of range for this alphabet.
    pub fn symbol(&self, lit: Lit) -> char {
        let name = self.vars[lit.var().position()];
        if lit.is_positive() {
            name
        } else {
            name.to_ascii_uppercase()
        }
    }

    /// All literals, in alphabet order.
    pub fn literals(&self) -> impl Iterator<Item = (char, Lit)> + '_ {
        self.symbols.iter().filter_map(move |&c| self.lookup(c).map(|lit| (c, lit)))
    }

    /// Assignment counters `0 .. 2^n`, bit `k` assigns variable `k + 1`.
    pub fn assignments(&self) -> impl Iterator<Item = u64> {
        0..self.num_assignments() as u64
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let vars = vec!['a', 'b', 'c'];
        Alphabet {
            symbols: DEFAULT_SYMBOLS.chars().collect(),
            vars,
        }
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

fn complement_char(c: char) -> char {
    if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c.to_ascii_lowercase()
    }
}
