//! Error types.

use thiserror::Error;

/// Errors from parsing a selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Empty entry in selector list at offset {0}")]
    EmptyEntry(usize),

    #[error("Unterminated attribute selector starting at offset {0}")]
    UnterminatedAttribute(usize),

    #[error("Expected a name after '{prefix}' at offset {offset}")]
    MissingName { prefix: char, offset: usize },

    #[error("Combinator at offset {0} is not followed by a selector")]
    DanglingCombinator(usize),

    #[error("Unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },
}

/// Errors from auto-registering items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutoRegisterError {
    #[error("Element '{0}' not found")]
    ElementNotFound(String),

    #[error("Element ID '{0}' is used more than once")]
    DuplicateId(String),

    #[error("Invalid auto selector on '{id}': {source}")]
    InvalidSelector {
        id: String,
        #[source]
        source: SelectorError,
    },
}
