use crate::error::{Result, ShortenerError};
use snip_core::{Alias, RecordId, StoreError, UrlSaver};
use snip_generator::Generator;
use std::sync::Arc;
use tracing::{debug, info, warn, Instrument, Span};

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub id: RecordId,
    pub alias: Alias,
}

/// Saves URLs through a [`UrlSaver`], choosing aliases with a [`Generator`]
/// when the caller does not supply one.
///
/// - A caller-supplied alias gets exactly one attempt. If it is taken the
///   caller sees [`ShortenerError::AliasConflict`].
/// - A generated alias that is taken is replaced by a fresh one, up to
///   `max_attempts` times in total.
/// - Backend failures are returned as-is and never retried.
///
/// Diagnostics are emitted inside the span given at construction, so the
/// caller decides where they end up.
#[derive(Debug, Clone)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    max_attempts: usize,
    span: Span,
}

impl<S: UrlSaver, G: Generator> ShortenerService<S, G> {
    pub fn new(store: S, generator: G) -> Self {
        Self::from_shared(Arc::new(store), Arc::new(generator))
    }

    /// Creates a service over a store that is also used elsewhere, e.g. by
    /// the redirect and delete handlers.
    pub fn from_shared(store: Arc<S>, generator: Arc<G>) -> Self {
        Self {
            store,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            span: Span::none(),
        }
    }

    /// Sets how many generated aliases are tried before giving up. At least
    /// one attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the span diagnostics are recorded under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Saves `target_url` under `alias`, or under a generated alias if none
    /// is given.
    pub async fn shorten(&self, target_url: &str, alias: Option<Alias>) -> Result<Shortened> {
        async move {
            if target_url.is_empty() {
                return Err(ShortenerError::InvalidUrl(
                    "URL cannot be empty".to_string(),
                ));
            }

            let shortened = match alias {
                Some(alias) => self.save_custom(target_url, alias).await?,
                None => self.save_generated(target_url).await?,
            };

            info!(alias = %shortened.alias, id = %shortened.id, "url saved");
            Ok(shortened)
        }
        .instrument(self.span.clone())
        .await
    }

    async fn save_custom(&self, target_url: &str, alias: Alias) -> Result<Shortened> {
        let id = self.store.save_url(target_url, &alias).await?;
        Ok(Shortened { id, alias })
    }

    async fn save_generated(&self, target_url: &str) -> Result<Shortened> {
        for attempt in 1..=self.max_attempts {
            let alias: Alias = self.generator.generate().into();

            match self.store.save_url(target_url, &alias).await {
                Ok(id) => return Ok(Shortened { id, alias }),
                Err(StoreError::AlreadyExists(_)) => {
                    debug!(alias = %alias, attempt, "generated alias already taken");
                }
                Err(err) => return Err(err.into()),
            }
        }

        warn!(attempts = self.max_attempts, "could not find a free alias");
        Err(ShortenerError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}
