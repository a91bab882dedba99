use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use super::env::EnvSource;
use super::file::FileSource;
use super::source::TemplateSource;
use super::CatalogError;
use crate::format::{Fields, Template};
use crate::Error;

/// A set of named, pre-validated templates.
///
/// Templates are loaded from TOML files and environment variables. Every
/// string value is a template; nested tables produce dotted names, so
///
/// ```toml
/// title = "%app%{ - %document%}"
///
/// [mail]
/// subject = "{Re: %thread%}%topic%"
/// ```
///
/// yields the templates `title` and `mail.subject`.
///
/// ## Example
///
/// ```no_run
/// use parsable::{Catalog, FieldValue};
/// use std::collections::HashMap;
///
/// let catalog = Catalog::builder()
///     .with_file("templates/default.toml", true)
///     .with_env("MYAPP_TEMPLATE", "__")
///     .with_file("templates/local.toml", false)
///     .build()?;
///
/// let host = HashMap::from([("app".to_string(), FieldValue::from("Editor"))]);
/// println!("{}", catalog.render("title", &host)?);
/// # Ok::<(), parsable::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    templates: BTreeMap<String, Template>,
}

impl Catalog {
    /// Creates a new catalog builder.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Renders the template called `name` against `host`.
    pub fn render<F: Fields + ?Sized>(&self, name: &str, host: &F) -> Result<String, Error> {
        let template = self
            .get(name)
            .ok_or_else(|| Error::UnknownTemplate(name.to_string()))?;
        Ok(template.render(host)?)
    }

    /// Template names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates.iter().map(|(name, t)| (name.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Builder for a [`Catalog`].
///
/// Sources are applied in registration order; a template name defined by a
/// later source replaces the earlier definition.
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct CatalogBuilder {
    sources: Vec<Box<dyn TemplateSource>>,
}

impl CatalogBuilder {
    /// Adds a TOML file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Loads templates from environment variables starting with `prefix`
    /// followed by `separator`.
    ///
    /// The rest of the variable name is split on `separator` and lowercased
    /// to form the template name, so with prefix `MYAPP` and separator `__`,
    /// `MYAPP__MAIL__SUBJECT` overrides `mail.subject`.
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    pub fn with_env(self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.with_source(EnvSource::new(prefix, separator))
    }

    /// Adds a custom source.
    pub fn with_source(mut self, source: impl TemplateSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads all sources, then validates every template.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        // name -> (origin, source text) of the winning definition
        let mut merged: BTreeMap<String, (String, String)> = BTreeMap::new();

        for source in &self.sources {
            let origin = source.origin();
            let entries = source.entries()?;
            debug!(%origin, entries = entries.len(), "applying template source");
            for entry in entries {
                merged.insert(entry.name, (origin.clone(), entry.source));
            }
        }

        let mut templates = BTreeMap::new();
        for (name, (origin, source)) in merged {
            match Template::new(source) {
                Ok(template) => {
                    templates.insert(name, template);
                }
                Err(source) => {
                    return Err(CatalogError::InvalidTemplate {
                        name,
                        origin,
                        source,
                    })
                }
            }
        }
        debug!(templates = templates.len(), "template catalog loaded");

        Ok(Catalog { templates })
    }
}
