//! Error types for the transition table parser
//!
//! All fallible operations return `Result<T, Error>`.
//! An `Error` carries the 1-based line number and the text of the
//! offending line alongside the `ErrorKind` describing what went wrong.

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

use crate::StateInput;

/// A structural parse error, located at a single line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line} ({text:?}): {kind}")]
pub struct Error {
    /// 1-based line number
    pub line: usize,
    /// The offending line, verbatim
    pub text: String,
    #[source]
    pub kind: ErrorKind,
}

impl Error {
    pub fn new(line: usize, text: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            line,
            text: text.into(),
            kind,
        }
    }

    /// True when a numeric field could not be converted to an integer
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidInteger { .. })
    }
}

/// Why a line could not be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Numeric field text is not a decimal integer (includes the empty text
    /// left behind by a missing delimiter in lenient mode)
    #[error("invalid {field} {text:?}: {source}")]
    InvalidInteger {
        field: Field,
        text: String,
        source: ParseIntError,
    },

    /// Strict mode only
    #[error("missing '{0}' delimiter")]
    MissingDelimiter(char),

    /// Strict mode only
    #[error("stack operation {0:?} has no push ('!') or pop ('^') marker")]
    MissingStackMarker(String),

    /// Strict mode only
    #[error("invalid state identifier {0:?}")]
    InvalidIdentifier(String),

    /// `DuplicatePolicy::Reject` only
    #[error("duplicate transition for {key}, first defined on line {first_line}")]
    DuplicateKey { key: StateInput, first_line: usize },
}

/// Numeric slot of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Input,
    StackValue,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Input => write!(f, "input value"),
            Field::StackValue => write!(f, "stack value"),
        }
    }
}

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, Error>;
