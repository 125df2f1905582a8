//! Error type for catalog configuration.
//!
//! Every error here means the alphabet or the function catalog is broken.
//! There are no recoverable runtime errors once the configuration is valid.

use std::fmt;
use std::io;

use crate::types::Var;

#[derive(Debug)]
pub enum Error {
    /// Expression references a symbol that is not in the alphabet.
    UnknownSymbol { symbol: char, offset: usize },
    /// Expression contains a character that is neither a symbol nor an operator.
    UnexpectedChar { found: char, offset: usize },
    /// Expression mentions a variable the evaluating alphabet does not bind.
    UnboundVariable(Var),
    /// Expression ended where an operand was expected.
    UnexpectedEnd,
    /// Expression was parsed completely, but input remains.
    TrailingInput { offset: usize },
    /// Alphabet contains a non-letter.
    InvalidSymbol(char),
    /// Alphabet contains the same symbol twice.
    DuplicateSymbol(char),
    /// Alphabet has a symbol without its case-partner.
    MissingComplement(char),
    /// Alphabet has more variables than can be enumerated.
    TooManyVariables { count: usize, max: usize },
    /// Catalog has no functions.
    EmptyCatalog,
    /// Catalog entry `index` (0-based) failed to parse or evaluate.
    Catalog { index: usize, expr: String, error: Box<Error> },
    /// Catalog file could not be read.
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSymbol { symbol, offset } => {
                write!(f, "unknown symbol '{}' at offset {}", symbol, offset)
            }
            Error::UnexpectedChar { found, offset } => {
                write!(f, "unexpected character '{}' at offset {}", found, offset)
            }
            Error::UnboundVariable(var) => write!(f, "variable {} is not bound by the alphabet", var),
            Error::UnexpectedEnd => write!(f, "unexpected end of expression"),
            Error::TrailingInput { offset } => write!(f, "trailing input at offset {}", offset),
            Error::InvalidSymbol(c) => write!(f, "invalid alphabet symbol '{}': expected an ASCII letter", c),
            Error::DuplicateSymbol(c) => write!(f, "duplicate alphabet symbol '{}'", c),
            Error::MissingComplement(c) => write!(f, "alphabet symbol '{}' has no complement", c),
            Error::TooManyVariables { count, max } => {
                write!(f, "alphabet has {} variables, at most {} are supported", count, max)
            }
            Error::EmptyCatalog => write!(f, "function catalog is empty"),
            Error::Catalog { index, expr, error } => write!(f, "f{} = '{}': {}", index + 1, expr, error),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Catalog { error, .. } => Some(error.as_ref()),
            _ => None,
        }
    }
}
