use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog endpoint returned status {0}")]
    Status(u16),

    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid catalog endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidEndpoint(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Rejected page-number input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Page input is not a number: {0:?}")]
    NotANumber(String),

    #[error("Page {page} is outside 1..={total_pages}")]
    OutOfRange { page: usize, total_pages: usize },
}
