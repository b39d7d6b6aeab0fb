//! Legality checks for names and canonical values.

/// A legal shell variable name: `[_A-Za-z][A-Za-z0-9_]*`.
///
/// The sole underscore is excluded — it is syntactically valid in bash but
/// names a read-only special parameter there.
pub fn is_legal_name(name: &str) -> bool {
    if name == "_" {
        return false;
    }
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A canonical value is legal unless it carries a NUL, CR, or LF byte.
///
/// Applied to canonical (already unescaped) values only, never to raw
/// quoted tokens.
pub fn is_legal_value(value: &str) -> bool {
    !value.bytes().any(|b| matches!(b, 0 | b'\r' | b'\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sole_underscore_is_illegal() {
        assert!(!is_legal_name("_"));
    }

    #[test]
    fn underscore_compounds_are_legal() {
        assert!(is_legal_name("_X"));
        assert!(is_legal_name("X_"));
        assert!(is_legal_name("__"));
    }

    #[test]
    fn alphanumeric_names() {
        assert!(is_legal_name("X1"));
        assert!(is_legal_name("PATH"));
        assert!(is_legal_name("foo_bar_2"));
    }

    #[test]
    fn leading_digit_is_illegal() {
        assert!(!is_legal_name("1X"));
        assert!(!is_legal_name("9"));
    }

    #[test]
    fn empty_and_punctuated_names_are_illegal() {
        assert!(!is_legal_name(""));
        assert!(!is_legal_name("FOO-BAR"));
        assert!(!is_legal_name("FOO.BAR"));
        assert!(!is_legal_name("a b"));
    }

    #[test]
    fn control_bytes_make_a_value_illegal() {
        assert!(!is_legal_value("a\0b"));
        assert!(!is_legal_value("a\rb"));
        assert!(!is_legal_value("a\nb"));
    }

    #[test]
    fn ordinary_values_are_legal() {
        assert!(is_legal_value(""));
        assert!(is_legal_value("plain"));
        assert!(is_legal_value("spaces and $ ` \" ' specials"));
        assert!(is_legal_value("tab\there"));
        assert!(is_legal_value("héllo wörld"));
    }
}
