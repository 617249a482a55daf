use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A validated alias for a stored URL.
///
/// Aliases must be 3-32 characters long and contain only
/// alphanumeric characters, hyphens, or underscores. Matching is exact and
/// case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alias(String);

pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 32;

impl Alias {
    /// Creates a new `Alias` after validating the input.
    ///
    /// Valid aliases are 3-32 characters and contain only `[a-zA-Z0-9_-]`.
    pub fn new(alias: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let alias = alias.into();
        Self::validate(&alias)?;
        Ok(Self(alias))
    }

    /// Creates an `Alias` without validation.
    ///
    /// Use this only for aliases produced by trusted internal sources
    /// (e.g. generators whose settings were checked at construction).
    pub fn new_unchecked(alias: impl Into<String>) -> Self {
        Self(alias.into())
    }

    /// Returns `true` if `c` may appear in an alias.
    pub fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    /// Returns the alias as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(alias: &str) -> std::result::Result<(), CoreError> {
        if alias.len() < MIN_LENGTH || alias.len() > MAX_LENGTH {
            return Err(CoreError::InvalidAlias(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                alias.len()
            )));
        }

        if !alias.chars().all(Self::is_valid_char) {
            return Err(CoreError::InvalidAlias(format!(
                "must contain only alphanumeric characters, hyphens, or underscores: '{}'",
                alias
            )));
        }

        Ok(())
    }
}

impl TryFrom<String> for Alias {
    type Error = CoreError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Alias> for String {
    fn from(value: Alias) -> Self {
        value.0
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
