//! Boolean expression trees over literals.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::types::Lit;

/// A boolean expression over literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Lit(Lit),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn lit(lit: Lit) -> Self {
        Expr::Lit(lit)
    }

    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Evaluate the expression under `assignment`, where bit `k` is the value of variable `k + 1`.
    pub fn eval(&self, assignment: u64) -> bool {
        match self {
            Expr::Lit(lit) => lit.eval(assignment),
            Expr::Not(e) => !e.eval(assignment),
            Expr::And(l, r) => l.eval(assignment) && r.eval(assignment),
            Expr::Or(l, r) => l.eval(assignment) || r.eval(assignment),
        }
    }

    /// Depth of the expression tree (0 for literals).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Lit(_) => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::And(l, r) | Expr::Or(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Number of nodes in the expression tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Lit(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::And(l, r) | Expr::Or(l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Highest variable id mentioned in the expression.
    pub fn max_var(&self) -> u32 {
        match self {
            Expr::Lit(lit) => lit.var().id(),
            Expr::Not(e) => e.max_var(),
            Expr::And(l, r) | Expr::Or(l, r) => l.max_var().max(r.max_var()),
        }
    }

    /// Render the expression with the symbols of `alphabet`.
    pub fn display<'a>(&'a self, alphabet: &'a Alphabet) -> DisplayExpr<'a> {
        DisplayExpr { expr: self, alphabet }
    }
}

/// Helper returned by [`Expr::display`].
///
/// Output re-parses to the same tree: `&` binds tighter than `|`,
/// and parentheses are only emitted where precedence requires them.
pub struct DisplayExpr<'a> {
    expr: &'a Expr,
    alphabet: &'a Alphabet,
}

impl DisplayExpr<'_> {
    fn write(&self, f: &mut fmt::Formatter<'_>, expr: &Expr, parent: u8) -> fmt::Result {
        // Binding strength: Or = 1, And = 2, Not/Lit = 3.
        match expr {
            Expr::Lit(lit) => write!(f, "{}", self.alphabet.symbol(*lit)),
            Expr::Not(e) => {
                write!(f, "~")?;
                match e.as_ref() {
                    Expr::Lit(_) | Expr::Not(_) => self.write(f, e, 3),
                    _ => {
                        write!(f, "(")?;
                        self.write(f, e, 0)?;
                        write!(f, ")")
                    }
                }
            }
            Expr::And(l, r) => {
                if parent > 2 {
                    write!(f, "(")?;
                }
                self.write(f, l, 2)?;
                write!(f, "&")?;
                self.write(f, r, 3)?;
                if parent > 2 {
                    write!(f, ")")?;
                }
                Ok(())
            }
            Expr::Or(l, r) => {
                if parent > 1 {
                    write!(f, "(")?;
                }
                self.write(f, l, 1)?;
                write!(f, "|")?;
                self.write(f, r, 2)?;
                if parent > 1 {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for DisplayExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, self.expr, 0)
    }
}
