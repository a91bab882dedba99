//! Resolution of a single `%name%` / `%name|separator%` token.

use super::{FieldValue, Fields, FormatError};

/// Separator literal selecting natural-language joining.
pub const ENUMERATION: &str = "enumeration";

/// Resolves `token` (the text between two `%`) against `host`.
///
/// Everything after the first `|` is the separator, further `|` included.
pub fn resolve<F: Fields + ?Sized>(token: &str, host: &F) -> Result<String, FormatError> {
    let (name, separator) = match token.split_once('|') {
        Some((name, separator)) => (name, Some(separator)),
        None => (token, None),
    };

    let value = host
        .field(name)
        .ok_or_else(|| FormatError::FieldNotFound(name.to_string()))?;

    Ok(match (value, separator) {
        (FieldValue::List(items), Some(ENUMERATION)) => enumerate(&items),
        (FieldValue::List(items), Some(separator)) => items.join(separator),
        (value, _) => value.to_string(),
    })
}

/// Joins `items` as a natural-language list: `A`, `A and B`, `A, B and C`.
pub fn enumerate<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., second_last, last] => {
            let mut result = String::new();
            for item in head {
                result.push_str(item.as_ref());
                result.push_str(", ");
            }
            result.push_str(second_last.as_ref());
            result.push_str(" and ");
            result.push_str(last.as_ref());
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn host() -> HashMap<String, FieldValue> {
        HashMap::from([
            ("name".to_string(), FieldValue::from("Bob")),
            ("age".to_string(), FieldValue::from(42)),
            ("nickname".to_string(), FieldValue::Null),
            ("tags".to_string(), FieldValue::list(["x", "y", "z"])),
        ])
    }

    #[test]
    fn test_plain_scalar() {
        assert_eq!(resolve("name", &host()).unwrap(), "Bob");
        assert_eq!(resolve("age", &host()).unwrap(), "42");
    }

    #[test]
    fn test_null_renders_empty() {
        assert_eq!(resolve("nickname", &host()).unwrap(), "");
        assert_eq!(resolve("nickname|enumeration", &host()).unwrap(), "");
    }

    #[test]
    fn test_literal_separator_join() {
        assert_eq!(resolve("tags|/", &host()).unwrap(), "x/y/z");
        assert_eq!(resolve("tags|", &host()).unwrap(), "xyz");
    }

    #[test]
    fn test_separator_keeps_further_pipes() {
        assert_eq!(resolve("tags| | ", &host()).unwrap(), "x | y | z");
        assert_eq!(resolve("tags|a|b", &host()).unwrap(), "xa|bya|bz");
    }

    #[test]
    fn test_enumeration_join() {
        assert_eq!(resolve("tags|enumeration", &host()).unwrap(), "x, y and z");
    }

    #[test]
    fn test_list_without_separator_uses_comma() {
        assert_eq!(resolve("tags", &host()).unwrap(), "x, y, z");
    }

    #[test]
    fn test_separator_ignored_for_scalars() {
        assert_eq!(resolve("name|, ", &host()).unwrap(), "Bob");
        assert_eq!(resolve("age|enumeration", &host()).unwrap(), "42");
    }

    #[test]
    fn test_unknown_field() {
        let result = resolve("bogus|, ", &host());
        assert_eq!(result, Err(FormatError::FieldNotFound("bogus".into())));
    }

    #[test]
    fn test_enumerate_shapes() {
        assert_eq!(enumerate::<&str>(&[]), "");
        assert_eq!(enumerate(&["A"]), "A");
        assert_eq!(enumerate(&["A", "B"]), "A and B");
        assert_eq!(enumerate(&["A", "B", "C"]), "A, B and C");
        assert_eq!(enumerate(&["A", "B", "C", "D"]), "A, B, C and D");
    }
}
