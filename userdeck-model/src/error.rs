use std::fmt::{self, Display};

/// Errors produced by model parsers and constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownSortKey(String),
    UnknownSortOrder(String),
    UnknownField(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownSortKey(key) => {
                write!(f, "unknown sort key: {key}")
            }
            ModelError::UnknownSortOrder(order) => {
                write!(f, "unknown sort order: {order}")
            }
            ModelError::UnknownField(field) => {
                write!(f, "unknown user field: {field}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
