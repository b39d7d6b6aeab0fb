//! Re-quoting canonical values into bash-safe double-quoted literals.

/// Characters the serializer must escape inside double quotes.
fn needs_escape(c: char) -> bool {
    matches!(c, '$' | '`' | '\\' | '"')
}

/// Render a canonical `(name, value)` pair as a double-quoted bash
/// assignment, optionally prefixed by a keyword such as `export`.
///
/// Every `$`, `` ` ``, `\`, `"` in the value gets a backslash; nothing
/// else is altered. No validation happens here — callers must have
/// validated name and value already. An empty prefix is omitted with no
/// trailing space.
pub fn serialize(name: &str, value: &str, prefix: Option<&str>) -> String {
    let mut out = String::with_capacity(name.len() + value.len() + 16);
    if let Some(prefix) = prefix {
        if !prefix.is_empty() {
            out.push_str(prefix);
            out.push(' ');
        }
    }
    out.push_str(name);
    out.push_str("=\"");
    for c in value.chars() {
        if needs_escape(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
