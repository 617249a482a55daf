use crate::error::Error;
use crate::Generator;
use rand::Rng;
use snip_core::alias::{MAX_LENGTH, MIN_LENGTH};
use snip_core::Alias;
use typed_builder::TypedBuilder;

/// Letters and digits, the alphabet used when none is configured.
pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub const DEFAULT_LENGTH: usize = 6;

/// Configures a [`RandomGenerator`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct RandomSettings {
    /// Number of characters in every generated alias.
    #[builder(default = DEFAULT_LENGTH)]
    pub length: usize,
    /// Characters aliases are drawn from.
    #[builder(default = DEFAULT_ALPHABET.to_string(), setter(into))]
    pub alphabet: String,
}

impl Default for RandomSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Draws fixed-length aliases uniformly from an alphabet.
///
/// Uses the thread-local RNG, which is fast but not cryptographically secure.
/// With the default settings there are 62^6 (about 5.7e10) possible aliases.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
    alphabet: Vec<char>,
}

impl RandomGenerator {
    /// Creates a generator after checking that its output is always a valid
    /// [`Alias`].
    pub fn new(settings: RandomSettings) -> Result<Self, Error> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&settings.length) {
            return Err(Error::InvalidLength {
                length: settings.length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }

        let mut alphabet: Vec<char> = settings.alphabet.chars().collect();
        if alphabet.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        if let Some(bad) = alphabet.iter().copied().find(|c| !Alias::is_valid_char(*c)) {
            return Err(Error::InvalidAlphabet(bad));
        }
        alphabet.sort_unstable();
        alphabet.dedup();

        Ok(Self {
            length: settings.length,
            alphabet,
        })
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        let mut alphabet: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        alphabet.sort_unstable();

        Self {
            length: DEFAULT_LENGTH,
            alphabet,
        }
    }
}

impl Generator for RandomGenerator {
    type Output = Alias;

    fn generate(&self) -> Self::Output {
        let mut rng = rand::rng();
        let alias: String = (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect();
        Alias::new_unchecked(alias)
    }
}
