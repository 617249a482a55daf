//! Core types and traits for the snip alias store.
//!
//! This crate defines the alias type, the store error taxonomy and the
//! capability traits that storage backends implement and handlers consume.

pub mod alias;
pub mod error;
pub mod store;

pub use alias::Alias;
pub use error::{CoreError, StoreError};
pub use store::{AliasStore, RecordId, UrlDeleter, UrlGetter, UrlSaver};
