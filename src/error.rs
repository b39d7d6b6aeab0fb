//! Parse failures: one distinct, identifiable kind per diagnosable fault.

use thiserror::Error;

/// What went wrong while processing a single line.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ErrorKind {
    /// The line does not match the assignment grammar at all.
    #[error("unexpected character in line")]
    Syntax,

    /// The extracted name is not a legal shell variable name.
    #[error("illegal variable name `{0}`")]
    IllegalName(String),

    /// Opening and closing quote characters differ.
    #[error("mismatched quote characters")]
    MismatchedQuote,

    /// A single-quoted value contains a literal single quote.
    #[error("single quote inside a single-quoted value")]
    IllegalQuote,

    /// A character that must be escaped in its quote context appears bare.
    #[error("unescaped special character `{0}`")]
    UnescapedSpecialChar(char),

    /// The canonical value contains a NUL, CR, or LF byte.
    #[error("value contains a NUL, CR, or LF byte")]
    IllegalValue,
}

/// A failed line, carrying the offending text for diagnostics.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{kind} in {line:?}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub line: String,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, line: &str) -> Self {
        Self {
            kind,
            line: line.to_string(),
        }
    }
}

/// Failure while loading a dotfile into a store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
