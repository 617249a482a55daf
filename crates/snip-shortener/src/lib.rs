//! Save path of the URL shortener.
//!
//! [`ShortenerService`] sits between the save handler and a [`UrlSaver`]:
//! it picks the alias (caller-supplied or generated) and retries generated
//! aliases that turn out to be taken. Redirects and deletions need no such
//! logic and go straight to [`UrlGetter`] and [`UrlDeleter`].
//!
//! [`UrlSaver`]: snip_core::UrlSaver
//! [`UrlGetter`]: snip_core::UrlGetter
//! [`UrlDeleter`]: snip_core::UrlDeleter

pub mod error;
pub mod service;

pub use error::ShortenerError;
pub use service::{Shortened, ShortenerService};
