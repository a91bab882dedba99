//! Named templates loaded from TOML files and environment variables.

mod builder;
mod env;
mod error;
mod file;
mod source;

pub use builder::{Catalog, CatalogBuilder};
pub use env::EnvSource;
pub use error::CatalogError;
pub use file::FileSource;
pub use source::{flatten_table, TemplateEntry, TemplateSource};
