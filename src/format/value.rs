//! Field values and the named-field capability templates render against.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::BuildHasher;

use super::FormatError;

/// The value of a named field on a host object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    /// No value; renders as an empty string.
    #[default]
    Null,
    Scalar(String),
    /// A multi-valued container, already in rendering order.
    List(Vec<String>),
}

impl FieldValue {
    /// Builds a [`FieldValue::List`] from anything that iterates displayable items.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        Self::List(items.into_iter().map(|item| item.to_string()).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// The plain string form: scalars as is, lists joined with `", "`.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Scalar(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

impl_scalar_from!(
    &str, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: fmt::Display> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: fmt::Display> From<&[T]> for FieldValue {
    fn from(items: &[T]) -> Self {
        Self::list(items)
    }
}

impl<T: fmt::Display> From<BTreeSet<T>> for FieldValue {
    fn from(items: BTreeSet<T>) -> Self {
        Self::list(items)
    }
}

/// Elements keep the set's iteration order, which is unspecified.
impl<T: fmt::Display, S> From<HashSet<T, S>> for FieldValue {
    fn from(items: HashSet<T, S>) -> Self {
        Self::list(items)
    }
}

impl From<&toml::Value> for FieldValue {
    fn from(value: &toml::Value) -> Self {
        match value {
            toml::Value::Array(items) => Self::List(items.iter().map(toml_plain).collect()),
            other => Self::Scalar(toml_plain(other)),
        }
    }
}

fn toml_plain(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => value.to_string(),
    }
}

/// Named-field lookup on a host object.
///
/// `field` returns `None` when the host has no field of that name; a field
/// that exists but holds nothing should return [`FieldValue::Null`].
pub trait Fields {
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Renders `template` against this host.
    fn format(&self, template: &str) -> Result<String, FormatError> {
        super::render(template, self)
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, name: &str) -> Option<FieldValue> {
        (**self).field(name)
    }
}

impl<S: BuildHasher> Fields for HashMap<String, FieldValue, S> {
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.get(name).cloned()
    }
}

impl Fields for BTreeMap<String, FieldValue> {
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.get(name).cloned()
    }
}

/// Looks `name` up as a key first, then as a dotted path through nested tables.
impl Fields for toml::Table {
    fn field(&self, name: &str) -> Option<FieldValue> {
        if let Some(value) = self.get(name) {
            return Some(value.into());
        }

        let mut parts = name.split('.');
        let mut current = self.get(parts.next()?)?;
        for part in parts {
            current = current.as_table()?.get(part)?;
        }
        Some(current.into())
    }
}

type Accessor<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// An explicit registry of field accessors for a host type.
///
/// ```
/// use parsable::{Accessors, Fields};
///
/// struct User {
///     name: String,
///     roles: Vec<String>,
/// }
///
/// let fields = Accessors::new()
///     .with("name", |u: &User| u.name.clone())
///     .with("roles", |u: &User| u.roles.clone());
///
/// let user = User { name: "Ada".into(), roles: vec!["admin".into(), "dev".into()] };
/// let text = fields.bind(&user).format("%name%{ (%roles|enumeration%)}")?;
/// assert_eq!(text, "Ada (admin and dev)");
/// # Ok::<(), parsable::FormatError>(())
/// ```
pub struct Accessors<T> {
    accessors: BTreeMap<String, Accessor<T>>,
}

impl<T> Accessors<T> {
    pub fn new() -> Self {
        Self {
            accessors: BTreeMap::new(),
        }
    }

    /// Registers `accessor` under `name`, replacing any previous accessor.
    #[must_use]
    pub fn with<F, V>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<FieldValue>,
    {
        self.accessors.insert(
            name.into(),
            Box::new(move |host: &T| -> FieldValue { accessor(host).into() }),
        );
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accessors.keys().map(String::as_str)
    }

    /// Pairs the registry with a host value, yielding something templates can render against.
    pub fn bind<'a>(&'a self, host: &'a T) -> Bound<'a, T> {
        Bound {
            accessors: self,
            host,
        }
    }
}

impl<T> Default for Accessors<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Accessors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.accessors.keys()).finish()
    }
}

/// A host value viewed through an [`Accessors`] registry.
pub struct Bound<'a, T> {
    accessors: &'a Accessors<T>,
    host: &'a T,
}

impl<T> Fields for Bound<'_, T> {
    fn field(&self, name: &str) -> Option<FieldValue> {
        self.accessors
            .accessors
            .get(name)
            .map(|accessor| accessor(self.host))
    }
}
