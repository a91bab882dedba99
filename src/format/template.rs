use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::section::{render, walk};
use super::{Fields, FormatError};

/// A template whose delimiters have been checked.
///
/// Rendering a `Template` can still fail with
/// [`FormatError::FieldNotFound`], but never with a delimiter or nesting
/// error.
///
/// Templates (de)serialize as plain strings, so they can be embedded in
/// configuration structs:
///
/// ```
/// use parsable::Template;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Labels {
///     window_title: Template,
/// }
///
/// let labels: Labels = toml::from_str(r#"window_title = "%app%{ - %document%}""#).unwrap();
/// assert_eq!(labels.window_title.field_names(), vec!["app", "document"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template {
    source: String,
    field_names: Vec<String>,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Result<Self, FormatError> {
        let source = source.into();
        let mut field_names: Vec<String> = Vec::new();
        walk(&source, &mut |token: &str| {
            let name = token.split_once('|').map_or(token, |(name, _)| name);
            if !field_names.iter().any(|seen| seen == name) {
                field_names.push(name.to_string());
            }
        })?;
        Ok(Self {
            source,
            field_names,
        })
    }

    pub fn render<F: Fields + ?Sized>(&self, host: &F) -> Result<String, FormatError> {
        render(&self.source, host)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct field names referenced by the template, in order of first appearance.
    pub fn field_names(&self) -> Vec<&str> {
        self.field_names.iter().map(String::as_str).collect()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Template {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Template {
    type Error = FormatError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        Self::new(source)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.source
    }
}
