//! Shared naming helpers

/// Upper-case the first character, leaving the rest untouched
///
/// # Examples
/// ```
/// use boilerplate::util::capitalize;
/// assert_eq!(capitalize("age"), "Age");
/// assert_eq!(capitalize("maxRetries"), "MaxRetries");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a numeric literal into a fragment usable inside an identifier
///
/// # Examples
/// ```
/// use boilerplate::util::identifier_fragment;
/// assert_eq!(identifier_fragment("10"), "10");
/// assert_eq!(identifier_fragment("-5"), "Minus5");
/// assert_eq!(identifier_fragment("2.5"), "2Point5");
/// ```
pub fn identifier_fragment(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for c in literal.chars() {
        match c {
            '-' => out.push_str("Minus"),
            '+' => {}
            '.' => out.push_str("Point"),
            c if c.is_ascii_alphanumeric() || c == '_' => out.push(c),
            _ => {}
        }
    }
    out
}

/// Whether `s` is a plain Java identifier (ASCII letters, digits, `_`, `$`)
///
/// # Examples
/// ```
/// use boilerplate::util::is_java_identifier;
/// assert!(is_java_identifier("age"));
/// assert!(!is_java_identifier("2fast"));
/// ```
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("count"), "Count");
        assert_eq!(capitalize("X"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_identifier_fragment() {
        assert_eq!(identifier_fragment("0"), "0");
        assert_eq!(identifier_fragment("-2147483648"), "Minus2147483648");
        assert_eq!(identifier_fragment("1e-7"), "1eMinus7");
        assert_eq!(identifier_fragment("-0.5"), "Minus0Point5");
    }

    #[test]
    fn test_is_java_identifier() {
        assert!(is_java_identifier("_count"));
        assert!(is_java_identifier("$ref"));
        assert!(is_java_identifier("ageLessThanMinus5"));
        assert!(!is_java_identifier(""));
        assert!(!is_java_identifier("ageLessThan-5"));
    }
}
