//! Quote-aware unescaping: raw value token → canonical value.
//!
//! The scan reproduces what bash computes into its environment for a
//! single-line assignment, with one deliberate restriction: every
//! character in the active required-escape set must be backslash-escaped,
//! even where bash would tolerate it bare (e.g. a `$` not followed by an
//! identifier). That trades a little strictness for a rule that never
//! silently diverges from bash's value.

use crate::error::ErrorKind;
use crate::parse::types::QuoteKind;
use crate::parse::validate::is_legal_value;

/// Characters that must be backslash-escaped inside double quotes.
fn double_quoted_special(c: char) -> bool {
    matches!(c, '$' | '`' | '\\' | '"')
}

/// Characters that must be backslash-escaped in an unquoted value.
fn unquoted_special(c: char) -> bool {
    matches!(
        c,
        '|' | '&' | ';' | '<' | '>' | '(' | ')' | '$' | '`' | '\\' | '"' | '\'' | ' ' | '\t'
    )
}

/// Convert a raw value token (quotes included) into its canonical value.
///
/// The token is scanned as code points with a single escape-pending flag.
/// A trailing unmatched backslash contributes nothing to the output.
pub fn unescape(token: &str) -> Result<String, ErrorKind> {
    // Terminal empties: nothing to scan.
    if token.is_empty() || token == "\"\"" || token == "''" {
        return Ok(String::new());
    }

    let kind = QuoteKind::of(token);
    let body = match kind {
        QuoteKind::None => token,
        QuoteKind::Single | QuoteKind::Double => {
            let first = token.chars().next();
            let last = token.chars().next_back();
            if token.chars().count() < 2 || first != last {
                return Err(ErrorKind::MismatchedQuote);
            }
            // The surrounding quotes are ASCII, so the slice is safe.
            &token[1..token.len() - 1]
        }
    };

    if kind == QuoteKind::Single {
        // Fully literal; the body itself can never hold a single quote.
        if body.contains('\'') {
            return Err(ErrorKind::IllegalQuote);
        }
        if !is_legal_value(body) {
            return Err(ErrorKind::IllegalValue);
        }
        return Ok(body.to_string());
    }

    let special: fn(char) -> bool = match kind {
        QuoteKind::Double => double_quoted_special,
        _ => unquoted_special,
    };

    let mut out = String::with_capacity(body.len());
    let mut esc = false;
    for c in body.chars() {
        if esc {
            if special(c) {
                out.push(c);
            } else if kind == QuoteKind::Double {
                // bash keeps the backslash before a non-special character
                // inside double quotes
                out.push('\\');
                out.push(c);
            } else {
                // unquoted, bash strips the backslash before any character
                out.push(c);
            }
            esc = false;
            continue;
        }
        if c == '\\' {
            esc = true;
            continue;
        }
        if special(c) {
            return Err(ErrorKind::UnescapedSpecialChar(c));
        }
        out.push(c);
    }
    // Scan end closes a dangling escape with no character.

    if !is_legal_value(&out) {
        return Err(ErrorKind::IllegalValue);
    }
    Ok(out)
}
