//! Delimiter scanning for templates.
//!
//! Two modes are supported:
//!
//! - **flat**: a single delimiter character marks both ends of a region
//!   (`%name%`). Regions never nest.
//! - **nested**: an open/close pair (`{` and `}`) where regions may contain
//!   further pairs. Only top-level regions are split out; inner pairs stay in
//!   the region text verbatim.
//!
//! Offsets are byte offsets and are shifted by the `base` passed in, so a
//! caller scanning a slice of a larger template can report positions in terms
//! of the whole template.

use super::FormatError;

/// Deepest nesting [`split_nested`] accepts before failing with
/// [`FormatError::NestingTooDeep`].
pub const MAX_NESTING: usize = 64;

/// A piece of scanned input.
///
/// For [`Segment::Delimited`], `text` excludes the delimiters and `offset`
/// points at the first byte after the opening delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal { text: &'a str, offset: usize },
    Delimited { text: &'a str, offset: usize },
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Literal { text, .. } | Segment::Delimited { text, .. } => text,
        }
    }
}

/// Splits `input` on a single non-nesting delimiter.
///
/// Empty literal runs are omitted; empty regions (`%%`) are kept. An odd
/// number of delimiters fails with [`FormatError::MalformedTemplate`] pointing
/// at the unmatched one.
pub fn split_flat(
    input: &str,
    delimiter: char,
    base: usize,
) -> Result<Vec<Segment<'_>>, FormatError> {
    let width = delimiter.len_utf8();
    let mut segments = Vec::new();
    let mut open: Option<usize> = None;
    let mut start = 0;

    for (i, ch) in input.char_indices() {
        if ch != delimiter {
            continue;
        }
        match open.take() {
            None => {
                push_literal(&mut segments, input, start, i, base);
                open = Some(i);
            }
            Some(at) => {
                segments.push(Segment::Delimited {
                    text: &input[at + width..i],
                    offset: base + at + width,
                });
            }
        }
        start = i + width;
    }

    if let Some(at) = open {
        return Err(FormatError::MalformedTemplate {
            delimiter,
            offset: base + at,
        });
    }

    push_literal(&mut segments, input, start, input.len(), base);
    Ok(segments)
}

/// Splits `input` into literal runs and top-level `open`..`close` regions.
///
/// A `close` with no pending `open`, or an `open` that is never closed, fails
/// with [`FormatError::MalformedTemplate`]. Regions nested more than
/// [`MAX_NESTING`] deep fail with [`FormatError::NestingTooDeep`], so callers
/// that recurse into regions are bounded.
pub fn split_nested(
    input: &str,
    open: char,
    close: char,
    base: usize,
) -> Result<Vec<Segment<'_>>, FormatError> {
    debug_assert_ne!(open, close, "nested scanning needs distinct delimiters");

    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut region_start = 0;
    let mut start = 0;

    for (i, ch) in input.char_indices() {
        if ch == open {
            if depth == 0 {
                push_literal(&mut segments, input, start, i, base);
                region_start = i;
            }
            depth += 1;
            if depth > MAX_NESTING {
                return Err(FormatError::NestingTooDeep {
                    limit: MAX_NESTING,
                    offset: base + i,
                });
            }
        } else if ch == close {
            if depth == 0 {
                return Err(FormatError::MalformedTemplate {
                    delimiter: close,
                    offset: base + i,
                });
            }
            depth -= 1;
            if depth == 0 {
                let content = region_start + open.len_utf8();
                segments.push(Segment::Delimited {
                    text: &input[content..i],
                    offset: base + content,
                });
                start = i + close.len_utf8();
            }
        }
    }

    if depth > 0 {
        return Err(FormatError::MalformedTemplate {
            delimiter: open,
            offset: base + region_start,
        });
    }

    push_literal(&mut segments, input, start, input.len(), base);
    Ok(segments)
}

/// Replaces every `delimiter`-bounded region of `input` with the output of
/// `resolve`, keeping literal text as is.
///
/// The first error returned by `resolve` aborts the substitution.
pub fn substitute<F>(
    input: &str,
    delimiter: char,
    base: usize,
    mut resolve: F,
) -> Result<String, FormatError>
where
    F: FnMut(&str) -> Result<String, FormatError>,
{
    let mut result = String::with_capacity(input.len());

    for segment in split_flat(input, delimiter, base)? {
        match segment {
            Segment::Literal { text, .. } => result.push_str(text),
            Segment::Delimited { text, .. } => result.push_str(&resolve(text)?),
        }
    }

    Ok(result)
}

fn push_literal<'a>(
    segments: &mut Vec<Segment<'a>>,
    input: &'a str,
    start: usize,
    end: usize,
    base: usize,
) {
    if end > start {
        segments.push(Segment::Literal {
            text: &input[start..end],
            offset: base + start,
        });
    }
}
