//! Line classification and assignment extraction.
//!
//! A raw line is either blank/comment-only (produces nothing) or a
//! candidate assignment, split here into keyword, name, raw value token,
//! and trailing marker. Escape processing happens later, in the unescape
//! engine; this module only finds the token boundaries.

use crate::error::ErrorKind;
use crate::parse::types::RawAssignment;

/// Keyword prefixes the assignment grammar accepts before a name.
const KEYWORDS: &[&str] = &["declare", "export", "local"];

/// Outcome of classifying one raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or comment-only; produces no assignment.
    Blank,
    /// Anything else: a candidate assignment, passed on unmodified.
    Candidate(&'a str),
}

/// Classify a raw line: blank iff it matches `^[\t ]*(#.*)?$`.
pub fn classify(line: &str) -> Line<'_> {
    let rest = line.trim_start_matches([' ', '\t']);
    if rest.is_empty() || rest.starts_with('#') {
        Line::Blank
    } else {
        Line::Candidate(line)
    }
}

/// Split a candidate assignment line into its parts.
///
/// Grammar: `WS? keyword? WS? name "=" value tail? WS?` where the keyword
/// must be separated from the name by whitespace and the name may not
/// contain whitespace or `=`. The name is not validated here.
pub fn extract(line: &str) -> Result<RawAssignment<'_>, ErrorKind> {
    let mut rest = line.trim_start_matches([' ', '\t']);

    let mut keyword = None;
    for kw in KEYWORDS {
        if let Some(after) = rest.strip_prefix(kw) {
            if after.starts_with([' ', '\t']) {
                keyword = Some(&rest[..kw.len()]);
                rest = after.trim_start_matches([' ', '\t']);
                break;
            }
        }
    }

    let Some(eq) = rest.find('=') else {
        return Err(ErrorKind::Syntax);
    };
    let name = &rest[..eq];
    if name.is_empty() || name.contains([' ', '\t']) {
        return Err(ErrorKind::Syntax);
    }

    let (value_token, tail) = split_value(&rest[eq + 1..])?;
    Ok(RawAssignment {
        keyword,
        name,
        value_token,
        tail,
    })
}

/// Find where the raw value token ends and the trailing marker begins.
///
/// A token opening with a quote runs through its closing quote (double
/// quotes honor backslash escapes, single quotes take none) and must be
/// followed by a valid tail. A token that never closes its quote is
/// returned whole so the unescape engine owns the mismatch diagnosis.
/// An unquoted token ends at the first unescaped space, tab, or `;` whose
/// remainder forms a valid tail; otherwise the character stays in the
/// token and the unescape engine diagnoses it.
fn split_value(rest: &str) -> Result<(&str, Option<&str>), ErrorKind> {
    match rest.chars().next() {
        Some(q @ ('"' | '\'')) => {
            let mut esc = false;
            for (i, c) in rest.char_indices().skip(1) {
                if esc {
                    esc = false;
                    continue;
                }
                if q == '"' && c == '\\' {
                    esc = true;
                    continue;
                }
                if c == q {
                    let end = i + c.len_utf8();
                    return match tail_of(&rest[end..]) {
                        Some(tail) => Ok((&rest[..end], tail)),
                        None => Err(ErrorKind::Syntax),
                    };
                }
            }
            Ok((rest, None))
        }
        _ => {
            let mut esc = false;
            for (i, c) in rest.char_indices() {
                if esc {
                    esc = false;
                    continue;
                }
                match c {
                    '\\' => esc = true,
                    ' ' | '\t' | ';' => {
                        if let Some(tail) = tail_of(&rest[i..]) {
                            return Ok((&rest[..i], tail));
                        }
                        // Not a tail: the character stays in the token.
                    }
                    _ => {}
                }
            }
            Ok((rest, None))
        }
    }
}

/// Validate a trailing run: `WS* ";"? (WS* "#" any*)? WS*`.
///
/// `rest` starts at the first character after the value token. Returns the
/// trailing marker (from its `;` or `#` onward) for a valid tail, `None`
/// when `rest` is not a tail. A comment `#` counts only when preceded by
/// whitespace or the tail `;` — a bare `#` glued to the token is not a
/// comment.
fn tail_of(rest: &str) -> Option<Option<&str>> {
    let b = rest.as_bytes();
    let mut i = 0;
    while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
        i += 1;
    }
    if i == b.len() {
        return Some(None);
    }
    if b[i] == b';' {
        let marker = i;
        i += 1;
        while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
            i += 1;
        }
        if i == b.len() || b[i] == b'#' {
            return Some(Some(&rest[marker..]));
        }
        return None;
    }
    if b[i] == b'#' && i > 0 {
        return Some(Some(&rest[i..]));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(line: &str) -> RawAssignment<'_> {
        extract(line).unwrap_or_else(|e| panic!("line {line:?} failed: {e}"))
    }

    // ── Classification ──

    #[test]
    fn blank_lines() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   "), Line::Blank);
        assert_eq!(classify("\t \t"), Line::Blank);
        assert_eq!(classify("# just a comment"), Line::Blank);
        assert_eq!(classify("   \t# indented comment"), Line::Blank);
    }

    #[test]
    fn candidate_lines() {
        assert_eq!(classify("FOO=bar"), Line::Candidate("FOO=bar"));
        assert_eq!(classify("  x"), Line::Candidate("  x"));
        // carriage return is not grammar whitespace
        assert_eq!(classify("\r"), Line::Candidate("\r"));
    }

    // ── Keyword handling ──

    #[test]
    fn keywords_are_recognized() {
        assert_eq!(parts("export FOO=bar").keyword, Some("export"));
        assert_eq!(parts("declare FOO=bar").keyword, Some("declare"));
        assert_eq!(parts("local FOO=bar").keyword, Some("local"));
        assert_eq!(parts("FOO=bar").keyword, None);
    }

    #[test]
    fn keyword_requires_whitespace() {
        // no separating whitespace: the whole word is the name
        let raw = parts("exportFOO=bar");
        assert_eq!(raw.keyword, None);
        assert_eq!(raw.name, "exportFOO");
        // a keyword can itself be assigned to
        assert_eq!(parts("export=1").name, "export");
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        let raw = parts("  \texport \t FOO=bar");
        assert_eq!(raw.keyword, Some("export"));
        assert_eq!(raw.name, "FOO");
    }

    // ── Name and token splitting ──

    #[test]
    fn simple_split() {
        let raw = parts("FOO=bar");
        assert_eq!(raw.name, "FOO");
        assert_eq!(raw.value_token, "bar");
        assert_eq!(raw.tail, None);
    }

    #[test]
    fn empty_value_token() {
        assert_eq!(parts("FOO=").value_token, "");
        assert_eq!(parts("FOO=\"\"").value_token, "\"\"");
        assert_eq!(parts("FOO=''").value_token, "''");
    }

    #[test]
    fn missing_equals_is_a_syntax_error() {
        assert_eq!(extract("FOO"), Err(ErrorKind::Syntax));
        assert_eq!(extract("export FOO"), Err(ErrorKind::Syntax));
    }

    #[test]
    fn whitespace_around_equals_is_a_syntax_error() {
        assert_eq!(extract("FOO =bar"), Err(ErrorKind::Syntax));
        assert_eq!(extract("FOO BAR=1"), Err(ErrorKind::Syntax));
    }

    #[test]
    fn empty_name_is_a_syntax_error() {
        assert_eq!(extract("=bar"), Err(ErrorKind::Syntax));
    }

    // ── Tail handling ──

    #[test]
    fn trailing_semicolon_and_comment() {
        let raw = parts("export FOO=bar ; # comment");
        assert_eq!(raw.value_token, "bar");
        assert_eq!(raw.tail, Some("; # comment"));
    }

    #[test]
    fn trailing_semicolon_alone() {
        let raw = parts("FOO=bar;");
        assert_eq!(raw.value_token, "bar");
        assert_eq!(raw.tail, Some(";"));
    }

    #[test]
    fn trailing_comment_needs_whitespace() {
        let raw = parts("FOO=bar # comment");
        assert_eq!(raw.value_token, "bar");
        assert_eq!(raw.tail, Some("# comment"));
        // glued to the token the hash is value content
        assert_eq!(parts("FOO=bar#comment").value_token, "bar#comment");
    }

    #[test]
    fn trailing_whitespace_is_consumed() {
        assert_eq!(parts("FOO=bar   ").value_token, "bar");
        assert_eq!(parts("FOO=\"x\" \t").value_token, "\"x\"");
    }

    // ── Quoted tokens ──

    #[test]
    fn quoted_token_spans_tail_characters() {
        assert_eq!(parts("FOO=\"a ; # c\"").value_token, "\"a ; # c\"");
        assert_eq!(parts("FOO='a b'").value_token, "'a b'");
    }

    #[test]
    fn escaped_quote_does_not_close_double_quotes() {
        assert_eq!(parts("FOO=\"a\\\"b\"").value_token, "\"a\\\"b\"");
    }

    #[test]
    fn single_quotes_take_no_escapes() {
        // the backslash does not protect the closing quote
        assert_eq!(extract("FOO='a\\'b'"), Err(ErrorKind::Syntax));
    }

    #[test]
    fn quoted_token_with_tail() {
        let raw = parts("FOO=\"a b\" ; # c");
        assert_eq!(raw.value_token, "\"a b\"");
        assert_eq!(raw.tail, Some("; # c"));
    }

    #[test]
    fn unclosed_quote_is_passed_through_whole() {
        // the unescape engine owns the mismatch diagnosis
        assert_eq!(parts("FOO=\"bar").value_token, "\"bar");
        assert_eq!(parts("FOO='bar").value_token, "'bar");
    }

    #[test]
    fn garbage_after_closing_quote_is_a_syntax_error() {
        assert_eq!(extract("FOO=\"a\"b"), Err(ErrorKind::Syntax));
        // a hash glued to the closing quote is not a comment
        assert_eq!(extract("FOO=\"bar\"#c"), Err(ErrorKind::Syntax));
    }

    #[test]
    fn comment_after_closing_quote_with_whitespace() {
        let raw = parts("FOO=\"bar\" #c");
        assert_eq!(raw.value_token, "\"bar\"");
        assert_eq!(raw.tail, Some("#c"));
    }

    // ── Unquoted escapes at the boundary ──

    #[test]
    fn escaped_whitespace_stays_in_the_token() {
        assert_eq!(parts("FOO=a\\ b").value_token, "a\\ b");
        assert_eq!(parts("FOO=bar\\ ;").value_token, "bar\\ ");
    }

    #[test]
    fn non_tail_whitespace_stays_in_the_token() {
        // not a valid tail after the space, so the space is token content
        assert_eq!(parts("FOO=bar baz").value_token, "bar baz");
        assert_eq!(parts("FOO=bar;baz").value_token, "bar;baz");
    }

    #[test]
    fn trailing_backslash_stays_in_the_token() {
        assert_eq!(parts("FOO=bar\\").value_token, "bar\\");
    }
}
