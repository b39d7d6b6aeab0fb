//! shkv: parse and re-serialize bash-style variable assignments without
//! invoking a shell.
//!
//! Dotfile-style configuration text (`export FOO="bar"`) is parsed line by
//! line into canonical `(name, value)` pairs, reproducing bash's quoting
//! and escaping semantics exactly — no variable expansion, no command
//! substitution, no shell. The inverse direction re-quotes a canonical
//! value into a bash-safe double-quoted literal a shell can re-source.
//!
//! # Architecture
//!
//! - **[`parse`]** — line classifier, assignment extractor, quote-aware
//!   unescape engine, name/value validators.
//! - **[`serialize`]** — canonical value → double-quoted literal.
//! - **[`store`]** — insertion-ordered store adapter over the pure core.
//! - **[`config`]** — CLI configuration: embedded defaults + user overlay.
//! - **[`logging`]** — stderr logger setup for the CLI.
//! - **[`error`]** — one distinct error kind per diagnosable fault.

/// CLI configuration loading: embedded defaults + user overlay merge.
pub mod config;
/// Distinct error kinds; parse errors carry the offending line.
pub mod error;
/// Stderr logger setup for the CLI.
pub mod logging;
/// Single-line parsing: classifier, extractor, unescape engine, validators.
pub mod parse;
/// Canonical value → bash-safe double-quoted literal.
pub mod serialize;
/// Insertion-ordered key/value store fed by the parser.
pub mod store;

use error::{ErrorKind, ParseError};
use parse::{classify, extract, is_legal_name, unescape, CanonicalAssignment, Line};

/// Parse one line into a canonical assignment.
///
/// `Ok(None)` for blank and comment-only lines. Every failure names its
/// kind and carries the offending line.
pub fn parse_line(line: &str) -> Result<Option<CanonicalAssignment>, ParseError> {
    let raw = match classify(line) {
        Line::Blank => return Ok(None),
        Line::Candidate(text) => extract(text).map_err(|kind| ParseError::new(kind, line))?,
    };
    if !is_legal_name(raw.name) {
        return Err(ParseError::new(
            ErrorKind::IllegalName(raw.name.to_string()),
            line,
        ));
    }
    let value = unescape(raw.value_token).map_err(|kind| ParseError::new(kind, line))?;
    Ok(Some(CanonicalAssignment {
        name: raw.name.to_string(),
        value,
    }))
}

/// Parse a `\n`-joined source, aborting on the first failing line.
pub fn parse_source(text: &str) -> Result<Vec<CanonicalAssignment>, ParseError> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        if let Some(assignment) = parse_line(line)? {
            out.push(assignment);
        }
    }
    Ok(out)
}

/// Best-effort parse of a `\n`-joined source: failing lines are collected
/// alongside the assignments that did parse.
pub fn parse_source_lossy(text: &str) -> (Vec<CanonicalAssignment>, Vec<ParseError>) {
    let mut out = Vec::new();
    let mut errors = Vec::new();
    for line in text.split('\n') {
        match parse_line(line) {
            Ok(Some(assignment)) => out.push(assignment),
            Ok(None) => {}
            Err(err) => errors.push(err),
        }
    }
    (out, errors)
}
