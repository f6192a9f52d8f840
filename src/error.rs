//! Error types for the prefix index.

use std::fmt;

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Which caller-supplied string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// The word passed to `insert_word`
    Word,
    /// The prefix passed to `find_by_prefix`
    Prefix,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Word => write!(f, "word"),
            Input::Prefix => write!(f, "prefix"),
        }
    }
}

/// Errors that can occur in index operations.
///
/// None of these are fatal: the index is left exactly as it was before the
/// failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An empty word or prefix was supplied
    #[error("empty {0}")]
    EmptyInput(Input),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::EmptyInput(Input::Word).to_string(), "empty word");
        assert_eq!(Error::EmptyInput(Input::Prefix).to_string(), "empty prefix");
    }
}
