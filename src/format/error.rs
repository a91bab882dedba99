use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("field not found: {0}")]
    FieldNotFound(String),

    #[error("malformed template: unmatched '{delimiter}' at byte {offset}")]
    MalformedTemplate { delimiter: char, offset: usize },

    #[error("sections nested deeper than {limit} levels at byte {offset}")]
    NestingTooDeep { limit: usize, offset: usize },
}
