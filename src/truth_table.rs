//! Truth tables of catalog expressions.
//!
//! A function over `n` variables is represented by its truth table,
//! a vector of `2^n` bits indexed by assignments in binary counting order.
//!
//! # Variable Ordering
//!
//! For row `k`, variable `x_i` has value `(k >> (i - 1)) & 1`,
//! so `x_1` is the least significant bit.
//!
//! For n=2:
//! - Row 0 (binary 00): x₁=0, x₂=0
//! - Row 1 (binary 01): x₁=1, x₂=0
//! - Row 2 (binary 10): x₁=0, x₂=1
//! - Row 3 (binary 11): x₁=1, x₂=1

use std::fmt;

use bitvec::prelude::*;

use crate::alphabet::Alphabet;
use crate::error::Error;
use crate::expr::Expr;
use crate::parser;
use crate::types::Var;

/// A truth table for a boolean function on `n` variables.
///
/// Two tables are equal iff they have the same length and identical bits;
/// this is the only notion of equivalence used by the search.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    /// Number of variables.
    n: u32,
    /// The truth table bits: 2ⁿ bits.
    bits: BitVec<u64, Lsb0>,
}

impl TruthTable {
    /// Create a truth table from an arbitrary function of the assignment.
    pub fn from_fn(n: u32, f: impl Fn(u64) -> bool) -> Self {
        let size = 1u64 << n;
        let bits = (0..size).map(f).collect();
        TruthTable { n, bits }
    }

    /// Evaluate `expr` under every assignment of the variables of `alphabet`.
    ///
    /// Fails with [`Error::UnboundVariable`] if the expression mentions a
    /// variable the alphabet does not bind.
    pub fn from_expr(alphabet: &Alphabet, expr: &Expr) -> Result<Self, Error> {
        let n = alphabet.num_vars() as u32;
        let max = expr.max_var();
        if max > n {
            return Err(Error::UnboundVariable(Var::new(max)));
        }
        Ok(TruthTable::from_fn(n, |assignment| expr.eval(assignment)))
    }

    /// Parse `input` and compute its truth table.
    pub fn parse(alphabet: &Alphabet, input: &str) -> Result<Self, Error> {
        let expr = parser::parse(alphabet, input)?;
        TruthTable::from_expr(alphabet, &expr)
    }

    /// Get the number of variables.
    pub fn num_vars(&self) -> u32 {
        self.n
    }

    /// Number of rows, `2^n`.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Value of the function under the assignment with index `row`.
    pub fn get(&self, row: usize) -> bool {
        self.bits[row]
    }

    /// Number of satisfying assignments.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Rows as booleans, in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Pointwise negation.
    pub fn complement(&self) -> Self {
        TruthTable {
            n: self.n,
            bits: !self.bits.clone(),
        }
    }
}

impl fmt::Debug for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TruthTable({})", self)
    }
}

impl fmt::Display for TruthTable {
    /// Rows in assignment order, row 0 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
