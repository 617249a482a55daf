use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by alias store backends.
///
/// `NotFound` and `AlreadyExists` describe the state of the table and are
/// meant for the end user. `Unavailable` means the backend itself failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("url not found: {0}")]
    NotFound(String),
    #[error("url already exists: {0}")]
    AlreadyExists(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Returns `true` for failures of the backend rather than of the request.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid alias: {0}")]
    InvalidAlias(String),
}
