//! Recursive resolution of `{...}` sections and `%...%` tokens.
//!
//! A section is kept only if some token inside it, at any depth, rendered to
//! a non-empty string. Text outside every section is always kept.
//!
//! Recursion follows section nesting, which [`scanner::split_nested`] caps at
//! [`scanner::MAX_NESTING`] on the outermost scan.

use super::binder;
use super::scanner::{self, Segment};
use super::{Fields, FormatError};

pub(crate) const SECTION_OPEN: char = '{';
pub(crate) const SECTION_CLOSE: char = '}';
pub(crate) const FIELD: char = '%';

/// Renders `template` against `host`.
///
/// Fails on the first unknown field or malformed delimiter; no partial output
/// is returned.
///
/// ```
/// use parsable::{render, FieldValue};
/// use std::collections::HashMap;
///
/// let host = HashMap::from([
///     ("name".to_string(), FieldValue::from("Bob")),
///     ("title".to_string(), FieldValue::Null),
/// ]);
/// assert_eq!(render("{%title% }%name%{ says hi}", &host)?, "Bob");
/// # Ok::<(), parsable::FormatError>(())
/// ```
pub fn render<F: Fields + ?Sized>(template: &str, host: &F) -> Result<String, FormatError> {
    tracing::trace!(template, "rendering template");
    let (rendered, _) = resolve_level(template, 0, host)?;
    Ok(rendered)
}

/// Resolves one nesting level of `input`, which starts at byte `base` of the
/// template. Returns the rendered text and whether any token inside produced
/// a non-empty value.
fn resolve_level<F: Fields + ?Sized>(
    input: &str,
    base: usize,
    host: &F,
) -> Result<(String, bool), FormatError> {
    let mut rendered = String::with_capacity(input.len());
    let mut had_value = false;

    for segment in scanner::split_nested(input, SECTION_OPEN, SECTION_CLOSE, base)? {
        match segment {
            Segment::Literal { text, offset } => {
                let text = scanner::substitute(text, FIELD, offset, |token| {
                    let value = binder::resolve(token, host)?;
                    had_value |= !value.is_empty();
                    Ok(value)
                })?;
                rendered.push_str(&text);
            }
            Segment::Delimited { text, offset } => {
                let (inner, inner_had_value) = resolve_level(text, offset, host)?;
                if inner_had_value {
                    rendered.push_str(&inner);
                    had_value = true;
                }
            }
        }
    }

    Ok((rendered, had_value))
}

/// Checks the delimiter structure of `template` without a host, calling
/// `on_token` for every field token in template order.
pub(crate) fn walk<'a, V>(template: &'a str, on_token: &mut V) -> Result<(), FormatError>
where
    V: FnMut(&'a str),
{
    walk_level(template, 0, on_token)
}

fn walk_level<'a, V>(input: &'a str, base: usize, on_token: &mut V) -> Result<(), FormatError>
where
    V: FnMut(&'a str),
{
    for segment in scanner::split_nested(input, SECTION_OPEN, SECTION_CLOSE, base)? {
        match segment {
            Segment::Literal { text, offset } => {
                scanner::split_flat(text, FIELD, offset)?
                    .iter()
                    .filter(|token| matches!(token, Segment::Delimited { .. }))
                    .for_each(|token| on_token(token.text()));
            }
            Segment::Delimited { text, offset } => walk_level(text, offset, on_token)?,
        }
    }
    Ok(())
}
