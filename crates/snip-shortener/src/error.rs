use snip_core::{CoreError, StoreError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("alias already exists: {0}")]
    AliasConflict(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid alias: {0}")]
    InvalidAlias(String),
    #[error("no free alias after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
    #[error("storage error: {0}")]
    Storage(#[source] StoreError),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidAlias(message) => Self::InvalidAlias(message),
        }
    }
}

impl From<StoreError> for ShortenerError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::AlreadyExists(alias) => Self::AliasConflict(alias),
            other => Self::Storage(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn taken_alias_becomes_conflict() {
        let err = ShortenerError::from(StoreError::AlreadyExists("abc".to_string()));
        assert_eq!(err, ShortenerError::AliasConflict("abc".to_string()));
    }

    #[test]
    fn backend_errors_keep_their_kind() {
        let err = ShortenerError::from(StoreError::Unavailable("disk full".to_string()));
        assert_eq!(
            err,
            ShortenerError::Storage(StoreError::Unavailable("disk full".to_string()))
        );
        assert!(matches!(
            err.source().and_then(|s| s.downcast_ref::<StoreError>()),
            Some(StoreError::Unavailable(_))
        ));

        let err = ShortenerError::from(StoreError::NotFound("abc".to_string()));
        assert!(matches!(err, ShortenerError::Storage(StoreError::NotFound(_))));
    }
}
