use crate::alias::Alias;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier assigned by the store to a newly saved record.
///
/// Identifiers increase monotonically and are never reused by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Write access to the alias table.
#[async_trait]
pub trait UrlSaver: Send + Sync + 'static {
    /// Persists `target_url` under `alias` and returns the new record id.
    ///
    /// Returns `Err(AlreadyExists)` without touching the table if the alias is
    /// taken. The record is durable once this returns `Ok`.
    async fn save_url(&self, target_url: &str, alias: &Alias) -> Result<RecordId>;
}

/// Read access to the alias table.
#[async_trait]
pub trait UrlGetter: Send + Sync + 'static {
    /// Returns the URL stored under `alias`, or `Err(NotFound)`.
    async fn get_url(&self, alias: &Alias) -> Result<String>;
}

/// Delete access to the alias table.
#[async_trait]
pub trait UrlDeleter: Send + Sync + 'static {
    /// Removes the record stored under `alias`.
    ///
    /// Returns `Err(NotFound)` if there was nothing to remove.
    async fn delete_url(&self, alias: &Alias) -> Result<()>;
}

/// A store exposing every capability.
///
/// Handlers should depend on the narrowest of [`UrlSaver`], [`UrlGetter`] or
/// [`UrlDeleter`] they need; this trait is for wiring a backend up once.
pub trait AliasStore: UrlSaver + UrlGetter + UrlDeleter {}

impl<T: UrlSaver + UrlGetter + UrlDeleter> AliasStore for T {}

#[async_trait]
impl<T: UrlSaver + ?Sized> UrlSaver for std::sync::Arc<T> {
    async fn save_url(&self, target_url: &str, alias: &Alias) -> Result<RecordId> {
        (**self).save_url(target_url, alias).await
    }
}

#[async_trait]
impl<T: UrlGetter + ?Sized> UrlGetter for std::sync::Arc<T> {
    async fn get_url(&self, alias: &Alias) -> Result<String> {
        (**self).get_url(alias).await
    }
}

#[async_trait]
impl<T: UrlDeleter + ?Sized> UrlDeleter for std::sync::Arc<T> {
    async fn delete_url(&self, alias: &Alias) -> Result<()> {
        (**self).delete_url(alias).await
    }
}
