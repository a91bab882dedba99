use super::source::{TemplateEntry, TemplateSource};
use super::CatalogError;

/// Templates taken from environment variables.
///
/// `APP__MAIL__SUBJECT` with prefix `APP` and separator `__` becomes the
/// template `mail.subject`. Values are used verbatim.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    separator: String,
}

impl EnvSource {
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        assert!(!separator.is_empty(), "separator must not be empty");
        Self {
            prefix: prefix.into(),
            separator,
        }
    }

    fn entries_from<I>(&self, vars: I) -> Vec<TemplateEntry>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix_with_sep = format!("{}{}", self.prefix, self.separator);

        vars.into_iter()
            .filter_map(|(key, value)| {
                let path_str = key.strip_prefix(&prefix_with_sep)?;
                let segments: Vec<String> = path_str
                    .split(&self.separator)
                    .map(str::to_lowercase)
                    .collect();
                if segments.iter().any(String::is_empty) {
                    return None;
                }
                Some(TemplateEntry::new(segments.join("."), value))
            })
            .collect()
    }
}

impl TemplateSource for EnvSource {
    fn origin(&self) -> String {
        format!("environment ({}{}*)", self.prefix, self.separator)
    }

    fn entries(&self) -> Result<Vec<TemplateEntry>, CatalogError> {
        Ok(self.entries_from(std::env::vars()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_maps_keys_to_lowercase_paths() {
        let source = EnvSource::new("APP", "__");
        let entries = source.entries_from(vars(&[
            ("APP__MAIL__SUBJECT", "Re: %topic%"),
            ("APP__TITLE", "%app%"),
            ("OTHER__TITLE", "ignored"),
        ]));

        assert_eq!(
            entries,
            vec![
                TemplateEntry::new("mail.subject", "Re: %topic%"),
                TemplateEntry::new("title", "%app%"),
            ]
        );
    }

    #[test]
    fn test_values_are_taken_verbatim() {
        let source = EnvSource::new("APP", "__");
        let entries = source.entries_from(vars(&[("APP__COUNT", "42")]));
        assert_eq!(entries, vec![TemplateEntry::new("count", "42")]);
        assert_eq!(source.origin(), "environment (APP__*)");
    }

    #[test]
    fn test_skips_empty_segments() {
        let source = EnvSource::new("APP", "__");
        let entries = source.entries_from(vars(&[("APP__", "x"), ("APP__A____B", "y")]));
        assert!(entries.is_empty());
    }
}
