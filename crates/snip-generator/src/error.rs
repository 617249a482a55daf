use thiserror::Error;

/// Errors returned when constructing a generator from invalid settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid alias length {length}; expected {min}..={max}")]
    InvalidLength { length: usize, min: usize, max: usize },
    #[error("alphabet must not be empty")]
    EmptyAlphabet,
    #[error("alphabet contains character {0:?} which is not allowed in an alias")]
    InvalidAlphabet(char),
}
