use std::path::PathBuf;
use thiserror::Error;

use crate::format::FormatError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("required template file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read template file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse template file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("template '{name}' from {origin} must be a string, found {kind}")]
    NotAString {
        name: String,
        kind: &'static str,
        origin: String,
    },

    #[error("invalid template '{name}' from {origin}: {source}")]
    InvalidTemplate {
        name: String,
        origin: String,
        source: FormatError,
    },
}
