use crate::error::Error;
use crate::Generator;
use snip_core::alias::{MAX_LENGTH, MIN_LENGTH};
use snip_core::Alias;
use std::sync::atomic::{AtomicU64, Ordering};

const COUNTER_WIDTH: usize = 6;
/// Digits in `u64::MAX`, the widest a counter can print.
const MAX_COUNTER_WIDTH: usize = 20;

/// A deterministic generator producing `prefix` followed by a zero-padded
/// counter, e.g. "wh000000", "wh000001".
///
/// Sequences are only unique within one instance; two processes sharing a
/// prefix will collide, which the store reports as `AlreadyExists`.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            prefix: self.prefix.clone(),
        }
    }
}

impl SeqGenerator {
    /// Creates a generator counting from zero.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, Error> {
        Self::with_offset(prefix, 0)
    }

    /// Creates a generator counting from `offset`.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Result<Self, Error> {
        let prefix = prefix.into();

        if let Some(bad) = prefix.chars().find(|c| !Alias::is_valid_char(*c)) {
            return Err(Error::InvalidAlphabet(bad));
        }

        // COUNTER_WIDTH alone already exceeds MIN_LENGTH
        let longest = prefix.len() + MAX_COUNTER_WIDTH;
        if longest > MAX_LENGTH {
            return Err(Error::InvalidLength {
                length: longest,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }

        Ok(Self {
            counter: AtomicU64::new(offset),
            prefix,
        })
    }
}

impl Generator for SeqGenerator {
    type Output = Alias;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        // counters past 999999 widen the alias, bounded by MAX_COUNTER_WIDTH
        let alias = format!("{}{:0width$}", self.prefix, count, width = COUNTER_WIDTH);
        Alias::new_unchecked(alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_aliases() {
        let generator = SeqGenerator::with_prefix("wh").unwrap();

        assert_eq!(generator.generate().as_str(), "wh000000");
        assert_eq!(generator.generate().as_str(), "wh000001");
        assert_eq!(generator.generate().as_str(), "wh000002");
    }

    #[test]
    fn starts_from_offset() {
        let generator = SeqGenerator::with_offset("wh", 1000).unwrap();

        assert_eq!(generator.generate().as_str(), "wh001000");
        assert_eq!(generator.generate().as_str(), "wh001001");
    }

    #[test]
    fn empty_prefix_is_allowed() {
        let generator = SeqGenerator::with_prefix("").unwrap();
        assert_eq!(generator.generate().as_str(), "000000");
    }

    #[test]
    fn rejects_invalid_prefix() {
        assert_eq!(
            SeqGenerator::with_prefix("a b").unwrap_err(),
            Error::InvalidAlphabet(' ')
        );
        assert!(SeqGenerator::with_prefix("x".repeat(27)).is_err());
    }

    #[test]
    fn prefix_leaves_room_for_the_widest_counter() {
        assert!(SeqGenerator::with_prefix("x".repeat(12)).is_ok());
        assert_eq!(
            SeqGenerator::with_offset("x".repeat(26), 999_999).unwrap_err(),
            Error::InvalidLength {
                length: 46,
                min: MIN_LENGTH,
                max: MAX_LENGTH
            }
        );
    }

    #[test]
    fn widened_counter_is_still_a_valid_alias() {
        let generator = SeqGenerator::with_offset("x".repeat(12), 999_999).unwrap();

        let last_narrow = generator.generate();
        let first_wide = generator.generate();
        assert_eq!(last_narrow.as_str(), "xxxxxxxxxxxx999999");
        assert_eq!(first_wide.as_str(), "xxxxxxxxxxxx1000000");
        assert!(Alias::new(first_wide.as_str()).is_ok());

        let generator = SeqGenerator::with_offset("x".repeat(12), u64::MAX).unwrap();
        let widest = generator.generate();
        assert_eq!(widest.as_str().len(), MAX_LENGTH);
        assert!(Alias::new(widest.as_str()).is_ok());
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = SeqGenerator::with_prefix("wh").unwrap();
        generator.generate();
        generator.generate();

        let cloned = generator.clone();

        assert_eq!(generator.generate().as_str(), "wh000002");
        assert_eq!(cloned.generate().as_str(), "wh000002");
    }
}
