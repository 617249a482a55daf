//! Storage backends for the snip alias store.
//!
//! [`SqliteStore`] is the durable backend. [`InMemoryStore`] keeps the same
//! contract without persistence and is meant for tests and throwaway runs.

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryStore;
pub use snip_core::error::Result;
pub use snip_core::{AliasStore, RecordId, StoreError, UrlDeleter, UrlGetter, UrlSaver};
pub use sqlite::{SqliteSettings, SqliteStore};
