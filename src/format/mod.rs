//! Pattern-based string formatting.
//!
//! A template mixes literal text with two kinds of markers:
//!
//! - `%name%` and `%name|separator%` field tokens, looked up on a host
//!   implementing [`Fields`]. With a separator, list values are joined with
//!   it; the separator `enumeration` joins as `A, B and C`.
//! - `{...}` optional sections, which may nest. A section is dropped unless a
//!   field token somewhere inside it rendered non-empty.
//!
//! ```
//! use parsable::{render, FieldValue};
//! use std::collections::HashMap;
//!
//! let host = HashMap::from([
//!     ("name".to_string(), FieldValue::from("Ada")),
//!     ("langs".to_string(), FieldValue::list(["en", "fr", "de"])),
//!     ("email".to_string(), FieldValue::Null),
//! ]);
//!
//! let text = render("%name%{ <%email%>}{ speaks %langs|enumeration%}", &host)?;
//! assert_eq!(text, "Ada speaks en, fr and de");
//! # Ok::<(), parsable::FormatError>(())
//! ```

mod binder;
mod error;
pub mod scanner;
mod section;
mod template;
mod value;

pub use binder::{enumerate, ENUMERATION};
pub use error::FormatError;
pub use section::render;
pub use template::Template;
pub use value::{Accessors, Bound, FieldValue, Fields};
