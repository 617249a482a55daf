use crate::Result;
use snip_storage::{SqliteSettings, SqliteStore};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct SqliteConfig {
    #[builder(default = "storage.db".to_string(), setter(into))]
    file_name: String,
    #[builder(default = 8)]
    max_connections: u32,
    #[builder(default = Duration::from_secs(5))]
    busy_timeout: Duration,
}

/// Test fixture for a disposable SQLite database.
///
/// The database lives in a temporary directory that is removed when the
/// fixture is dropped.
pub struct SqliteDatabase {
    dir: TempDir,
    config: SqliteConfig,
}

impl SqliteDatabase {
    /// Creates an empty temporary directory for the database file.
    pub fn new(config: SqliteConfig) -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("snip-").tempdir()?;
        Ok(Self { dir, config })
    }

    /// Path of the database file. It does not exist until the first open.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join(&self.config.file_name)
    }

    /// Settings pointing a store at this fixture's database.
    pub fn settings(&self) -> SqliteSettings {
        SqliteSettings::builder()
            .path(self.path())
            .max_connections(self.config.max_connections)
            .busy_timeout(self.config.busy_timeout)
            .build()
    }

    /// Opens a store on the fixture database, creating the schema if needed.
    /// Calling this again reopens the same file.
    pub async fn open(&self) -> Result<SqliteStore> {
        Ok(SqliteStore::open(self.settings()).await?)
    }
}
