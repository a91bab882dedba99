pub mod catalog;
mod error;
pub mod format;

pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use format::{enumerate, render, Accessors, FieldValue, Fields, FormatError, Template};
