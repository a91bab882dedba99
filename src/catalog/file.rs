//! Templates stored in a TOML file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use toml::Table;

use super::source::{flatten_table, TemplateEntry, TemplateSource};
use super::CatalogError;

/// Every string in the file is a template; nested tables give dotted names.
///
/// A missing file is an error only when the source is `required`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }

    fn read(&self) -> Result<Option<String>, CatalogError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound && !self.required => {
                tracing::debug!(path = %self.path.display(), "optional template file missing");
                Ok(None)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(CatalogError::FileNotFound(self.path.clone()))
            }
            Err(source) => Err(CatalogError::ReadError {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl TemplateSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn entries(&self) -> Result<Vec<TemplateEntry>, CatalogError> {
        let Some(contents) = self.read()? else {
            return Ok(Vec::new());
        };
        let table: Table = toml::from_str(&contents).map_err(|source| CatalogError::ParseError {
            path: self.path.clone(),
            source,
        })?;
        flatten_table(table, &self.origin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_entries_are_flattened() {
        let file = toml_file("greeting = \"Hello{ %name%}\"\n[mail]\nsubject = \"%topic%\"");

        let mut entries = FileSource::new(file.path(), true).entries().unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![
                TemplateEntry::new("greeting", "Hello{ %name%}"),
                TemplateEntry::new("mail.subject", "%topic%"),
            ]
        );
    }

    #[test]
    fn test_non_string_reports_file() {
        let file = toml_file("retries = 3");
        let source = FileSource::new(file.path(), true);

        match source.entries() {
            Err(CatalogError::NotAString { name, origin, .. }) => {
                assert_eq!(name, "retries");
                assert_eq!(origin, file.path().display().to_string());
            }
            other => panic!("expected NotAString, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml() {
        let file = toml_file("greeting = ");
        assert!(matches!(
            FileSource::new(file.path(), true).entries(),
            Err(CatalogError::ParseError { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = "/nonexistent/path/templates.toml";
        assert!(matches!(
            FileSource::new(path, true).entries(),
            Err(CatalogError::FileNotFound(_))
        ));
        assert!(FileSource::new(path, false).entries().unwrap().is_empty());
    }
}
