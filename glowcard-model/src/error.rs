use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidRecord(String),
    InvalidPageSize(usize),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidRecord(msg) => {
                write!(f, "invalid professional record: {msg}")
            }
            ModelError::InvalidPageSize(size) => {
                write!(f, "page size must be greater than zero (got {size})")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
