//! Error type shared by the fallible object operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObjectsError {
    /// A node was reached again while it was still being visited.
    #[error("cannot clone recursive data-structure")]
    RecursiveStructure,
    #[error("cannot modify a frozen object or array")]
    Frozen,
    #[error("array index {0} is out of range")]
    IndexOutOfRange(usize),
    #[error("invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
}
