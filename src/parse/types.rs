//! Types produced by the line parser and consumed by the store and CLI.

use serde::Serialize;

/// Which quoting surrounds a raw value token. Decides the escape rules the
/// unescape engine applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    /// No surrounding quotes.
    None,
    /// `'...'` — body is fully literal.
    Single,
    /// `"..."` — backslash escapes apply to `$`, `` ` ``, `\`, `"`.
    Double,
}

impl QuoteKind {
    /// Derive the quote kind from the first character of a raw value token.
    pub fn of(token: &str) -> QuoteKind {
        match token.chars().next() {
            Some('"') => QuoteKind::Double,
            Some('\'') => QuoteKind::Single,
            _ => QuoteKind::None,
        }
    }
}

/// A single line split into its syntactic parts.
///
/// Borrows the line; exists only for the duration of one parse call. The
/// name is unvalidated and the value token still carries its surrounding
/// quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAssignment<'a> {
    /// Leading keyword (`declare`, `export`, `local`), if present.
    pub keyword: Option<&'a str>,
    /// Variable name, not yet validated.
    pub name: &'a str,
    /// Raw value token, surrounding quotes included.
    pub value_token: &'a str,
    /// Trailing marker (`;` and/or `#comment`), if present.
    pub tail: Option<&'a str>,
}

/// A validated name with its fully unescaped value.
///
/// The unit handed to the store: the name matches the legal-name grammar
/// and the value holds no NUL, CR, or LF byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalAssignment {
    pub name: String,
    pub value: String,
}
