//! Parser for catalog expressions.
//!
//! Grammar (whitespace is ignored):
//!
//! ```text
//! expr   := term ('|' term)*
//! term   := factor ('&' factor)*
//! factor := ('~' | '!') factor | '(' expr ')' | SYMBOL
//! ```
//!
//! `~` binds tightest, then `&`, then `|`. Binary operators are left-associative.
//!
//! # Example
//!
//! ```
//! use rivest_rs::alphabet::Alphabet;
//! use rivest_rs::parser::parse;
//!
//! let alphabet = Alphabet::default();
//! let e = parse(&alphabet, "b&(A|C)").unwrap();
//! assert_eq!(e.display(&alphabet).to_string(), "b&(A|C)");
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use crate::alphabet::Alphabet;
use crate::error::Error;
use crate::expr::Expr;

/// Parse `input` into an expression over the literals of `alphabet`.
pub fn parse(alphabet: &Alphabet, input: &str) -> Result<Expr, Error> {
    let mut parser = Parser {
        alphabet,
        chars: input.char_indices().peekable(),
    };
    let expr = parser.parse_expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some((offset, _)) => Err(Error::TrailingInput { offset }),
    }
}

struct Parser<'a> {
    alphabet: &'a Alphabet,
    chars: Peekable<CharIndices<'a>>,
}

impl Parser<'_> {
    /// Next non-whitespace character, without consuming it.
    fn peek(&mut self) -> Option<(usize, char)> {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
        self.chars.peek().copied()
    }

    fn eat(&mut self, expected: char) -> bool {
        match self.peek() {
            Some((_, c)) if c == expected => {
                self.chars.next();
                true
            }
            _ => false,
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_term()?;
        while self.eat('|') {
            let rhs = self.parse_term()?;
            lhs = Expr::or(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_factor()?;
        while self.eat('&') {
            let rhs = self.parse_factor()?;
            lhs = Expr::and(lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_factor(&mut self) -> Result<Expr, Error> {
        let (offset, c) = self.peek().ok_or(Error::UnexpectedEnd)?;
        self.chars.next();
        match c {
            '~' | '!' => Ok(Expr::not(self.parse_factor()?)),
            '(' => {
                let inner = self.parse_expr()?;
                match self.peek() {
                    Some((_, ')')) => {
                        self.chars.next();
                        Ok(inner)
                    }
                    Some((offset, found)) => Err(Error::UnexpectedChar { found, offset }),
                    None => Err(Error::UnexpectedEnd),
                }
            }
            c if c.is_ascii_alphabetic() => match self.alphabet.lookup(c) {
                Some(lit) => Ok(Expr::lit(lit)),
                None => Err(Error::UnknownSymbol { symbol: c, offset }),
            },
            found => Err(Error::UnexpectedChar { found, offset }),
        }
    }
}
