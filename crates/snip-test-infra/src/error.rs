use std::result::Result as StdResult;
use thiserror::Error;

/// Errors that can occur when setting up test fixtures.
#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] snip_storage::StoreError),
}

/// A type alias for `Result` with `TestInfraError`.
pub type Result<T> = StdResult<T, TestInfraError>;
