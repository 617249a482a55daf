//! One handler per subcommand.
//!
//! Each handler is bound to the narrowest store capability it needs: the
//! redirect path can only read and the delete path can only delete.

use crate::model::{DeleteOutput, GetOutput, SaveOutput};
use snip_core::{Alias, CoreError, StoreError, UrlDeleter, UrlGetter, UrlSaver};
use snip_generator::Generator;
use snip_shortener::{ShortenerError, ShortenerService};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid alias: {0}")]
    InvalidAlias(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("url not found")]
    NotFound,
    #[error("url already exists")]
    AlreadyExists,
    #[error("internal error")]
    Internal,
}

impl From<CoreError> for CommandError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidAlias(message) => Self::InvalidAlias(message),
        }
    }
}

fn parse_alias(raw: &str) -> Result<Alias, CommandError> {
    Alias::new(raw).map_err(|err| {
        info!(alias = raw, error = %err, "rejected alias");
        CommandError::from(err)
    })
}

/// Saves `url`, under `alias` if given.
pub async fn save<S: UrlSaver, G: Generator>(
    service: &ShortenerService<S, G>,
    url: &str,
    alias: Option<&str>,
) -> Result<SaveOutput, CommandError> {
    let alias = alias.map(parse_alias).transpose()?;

    match service.shorten(url, alias).await {
        Ok(shortened) => Ok(SaveOutput {
            id: shortened.id.get(),
            alias: shortened.alias.to_string(),
            url: url.to_string(),
        }),
        Err(ShortenerError::AliasConflict(alias)) => {
            info!(alias = %alias, "url already exists");
            Err(CommandError::AlreadyExists)
        }
        Err(ShortenerError::InvalidUrl(message)) => Err(CommandError::InvalidUrl(message)),
        Err(ShortenerError::InvalidAlias(message)) => Err(CommandError::InvalidAlias(message)),
        Err(err) => {
            error!(error = %err, "failed to save url");
            Err(CommandError::Internal)
        }
    }
}

/// Looks up the URL stored under `alias`.
pub async fn redirect<G: UrlGetter + ?Sized>(
    getter: &G,
    alias: &str,
) -> Result<GetOutput, CommandError> {
    let alias = parse_alias(alias)?;

    match getter.get_url(&alias).await {
        Ok(url) => {
            info!(alias = %alias, url = %url, "resolved alias");
            Ok(GetOutput {
                alias: alias.to_string(),
                url,
            })
        }
        Err(StoreError::NotFound(_)) => {
            info!(alias = %alias, "url not found");
            Err(CommandError::NotFound)
        }
        Err(err) => {
            error!(alias = %alias, error = %err, "failed to get url");
            Err(CommandError::Internal)
        }
    }
}

/// Deletes `alias`. An alias that does not exist is reported, not ignored.
pub async fn remove<D: UrlDeleter + ?Sized>(
    deleter: &D,
    alias: &str,
) -> Result<DeleteOutput, CommandError> {
    let alias = parse_alias(alias)?;

    match deleter.delete_url(&alias).await {
        Ok(()) => {
            info!(alias = %alias, "url deleted");
            Ok(DeleteOutput {
                alias: alias.to_string(),
            })
        }
        Err(StoreError::NotFound(_)) => {
            info!(alias = %alias, "url not found");
            Err(CommandError::NotFound)
        }
        Err(err) => {
            error!(alias = %alias, error = %err, "failed to delete url");
            Err(CommandError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use broken::BrokenStore;
    use snip_generator::SeqGenerator;
    use snip_storage::InMemoryStore;
    use std::sync::Arc;

    fn service(store: Arc<InMemoryStore>) -> ShortenerService<InMemoryStore, SeqGenerator> {
        ShortenerService::from_shared(store, Arc::new(SeqGenerator::with_prefix("cli").unwrap()))
    }

    #[tokio::test]
    async fn save_get_delete_flow() {
        let store = Arc::new(InMemoryStore::new());
        let service = service(Arc::clone(&store));

        let saved = save(&service, "https://example.com", Some("docs")).await.unwrap();
        assert_eq!(
            saved,
            SaveOutput {
                id: 1,
                alias: "docs".to_string(),
                url: "https://example.com".to_string(),
            }
        );

        let got = redirect(store.as_ref(), "docs").await.unwrap();
        assert_eq!(got.url, "https://example.com");

        remove(store.as_ref(), "docs").await.unwrap();
        assert_eq!(
            redirect(store.as_ref(), "docs").await.unwrap_err(),
            CommandError::NotFound
        );
    }

    #[tokio::test]
    async fn save_without_alias_generates_one() {
        let store = Arc::new(InMemoryStore::new());

        let saved = save(&service(store), "https://example.com", None).await.unwrap();
        assert_eq!(saved.alias, "cli000000");
    }

    #[tokio::test]
    async fn save_duplicate_alias_is_conflict() {
        let store = Arc::new(InMemoryStore::new());
        let service = service(store);

        save(&service, "https://one.com", Some("dup")).await.unwrap();
        let err = save(&service, "https://two.com", Some("dup")).await.unwrap_err();

        assert_eq!(err, CommandError::AlreadyExists);
    }

    #[tokio::test]
    async fn save_empty_url_is_invalid() {
        let store = Arc::new(InMemoryStore::new());

        let err = save(&service(store), "", None).await.unwrap_err();
        assert!(matches!(err, CommandError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn delete_missing_alias_is_not_found() {
        let store = InMemoryStore::new();

        assert_eq!(
            remove(&store, "ghost").await.unwrap_err(),
            CommandError::NotFound
        );
    }

    #[tokio::test]
    async fn empty_alias_is_rejected_before_the_store() {
        let store = InMemoryStore::new();

        assert!(matches!(
            remove(&store, "").await.unwrap_err(),
            CommandError::InvalidAlias(_)
        ));
        assert!(matches!(
            redirect(&store, "a/b").await.unwrap_err(),
            CommandError::InvalidAlias(_)
        ));
    }

    #[tokio::test]
    async fn backend_failures_are_internal() {
        let store = BrokenStore;

        assert_eq!(
            redirect(&store, "abc").await.unwrap_err(),
            CommandError::Internal
        );
        assert_eq!(
            remove(&store, "abc").await.unwrap_err(),
            CommandError::Internal
        );

        let service = ShortenerService::new(store, SeqGenerator::with_prefix("x").unwrap());
        assert_eq!(
            save(&service, "https://example.com", None).await.unwrap_err(),
            CommandError::Internal
        );
    }

    mod broken {
        use snip_core::error::Result;
        use snip_core::{Alias, RecordId, StoreError, UrlDeleter, UrlGetter, UrlSaver};

        pub struct BrokenStore;

        fn unavailable<T>() -> Result<T> {
            Err(StoreError::Unavailable("disk on fire".to_string()))
        }

        #[async_trait::async_trait]
        impl UrlSaver for BrokenStore {
            async fn save_url(&self, _target_url: &str, _alias: &Alias) -> Result<RecordId> {
                unavailable()
            }
        }

        #[async_trait::async_trait]
        impl UrlGetter for BrokenStore {
            async fn get_url(&self, _alias: &Alias) -> Result<String> {
                unavailable()
            }
        }

        #[async_trait::async_trait]
        impl UrlDeleter for BrokenStore {
            async fn delete_url(&self, _alias: &Alias) -> Result<()> {
                unavailable()
            }
        }
    }
}
