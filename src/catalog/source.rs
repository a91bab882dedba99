use toml::{Table, Value};

use super::CatalogError;

/// One named template contributed by a source, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Dotted template name, e.g. `mail.subject`.
    pub name: String,
    pub source: String,
}

impl TemplateEntry {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Something that contributes templates to a [`Catalog`](super::Catalog).
pub trait TemplateSource: Send + Sync + std::fmt::Debug {
    /// Where the templates come from, for log lines and error messages.
    fn origin(&self) -> String;

    fn entries(&self) -> Result<Vec<TemplateEntry>, CatalogError>;
}

/// Flattens `table` into entries, joining nested table keys with `.`.
///
/// Every leaf must be a string; anything else is reported against `origin`.
pub fn flatten_table(table: Table, origin: &str) -> Result<Vec<TemplateEntry>, CatalogError> {
    let mut entries = Vec::new();
    let mut pending: Vec<(Option<String>, Table)> = vec![(None, table)];

    while let Some((prefix, table)) = pending.pop() {
        for (key, value) in table {
            let name = match &prefix {
                Some(prefix) => format!("{prefix}.{key}"),
                None => key,
            };
            match value {
                Value::String(source) => entries.push(TemplateEntry { name, source }),
                Value::Table(nested) => pending.push((Some(name), nested)),
                other => {
                    return Err(CatalogError::NotAString {
                        name,
                        kind: other.type_str(),
                        origin: origin.to_string(),
                    })
                }
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[TemplateEntry]) -> Vec<&str> {
        let mut names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn test_flatten_joins_nested_keys() {
        let table: Table = toml::from_str(
            r#"
            title = "%app%"

            [mail]
            subject = "Re: %topic%"

            [mail.footer]
            text = "bye"
            "#,
        )
        .unwrap();

        let entries = flatten_table(table, "defaults.toml").unwrap();

        assert_eq!(
            names(&entries),
            vec!["mail.footer.text", "mail.subject", "title"]
        );
        assert!(entries.contains(&TemplateEntry::new("mail.subject", "Re: %topic%")));
    }

    #[test]
    fn test_flatten_names_origin_for_non_strings() {
        let table: Table = toml::from_str("[limits]\nmax = [1, 2]").unwrap();

        match flatten_table(table, "local.toml") {
            Err(CatalogError::NotAString { name, kind, origin }) => {
                assert_eq!(name, "limits.max");
                assert_eq!(kind, "array");
                assert_eq!(origin, "local.toml");
            }
            other => panic!("expected NotAString, got {other:?}"),
        }
    }

    #[test]
    fn test_flatten_empty_table() {
        assert!(flatten_table(Table::new(), "empty").unwrap().is_empty());
    }
}
