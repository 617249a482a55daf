pub mod error;
pub mod random;
pub mod seq;

pub use error::Error;
pub use random::{RandomGenerator, RandomSettings};
pub use seq::SeqGenerator;

use snip_core::Alias;

/// Trait for generating aliases.
///
/// Implementations are pure generators that don't interact with storage.
/// They make no uniqueness promise: the store rejects a taken alias and the
/// caller decides whether to draw again.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Alias>;

    /// Produces the next candidate alias.
    fn generate(&self) -> Self::Output;
}

impl<G: Generator + ?Sized> Generator for std::sync::Arc<G> {
    type Output = G::Output;

    fn generate(&self) -> Self::Output {
        (**self).generate()
    }
}
