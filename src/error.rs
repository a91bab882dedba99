use crate::catalog::CatalogError;
use crate::format::FormatError;
use thiserror::Error;

/// Top-level error type for the parsable library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("template catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("no template named '{0}' in catalog")]
    UnknownTemplate(String),
}
