mod cli;
mod commands;
mod logging;
mod model;

use crate::cli::{Command, CLI};
use crate::model::Output;
use anyhow::Context;
use clap::Parser;
use snip_generator::{RandomGenerator, RandomSettings};
use snip_shortener::ShortenerService;
use snip_storage::SqliteStore;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    logging::init(config.env)?;

    info!(
        env = %config.env,
        storage_path = %config.storage_path.display(),
        "starting snip"
    );

    ensure_parent_dir(&config.storage_path)?;
    let store = Arc::new(
        SqliteStore::connect(&config.storage_path)
            .await
            .context("failed to init storage")?,
    );

    let result = match config.command {
        Command::Save { url, alias } => {
            let generator = RandomGenerator::new(
                RandomSettings::builder()
                    .length(config.alias_length)
                    .build(),
            )
            .context("invalid alias generator settings")?;
            let service = ShortenerService::from_shared(Arc::clone(&store), Arc::new(generator))
                .with_max_attempts(config.max_attempts)
                .with_span(info_span!("save", url = %url));

            commands::save(&service, &url, alias.as_deref())
                .await
                .map(Output::Saved)
        }
        Command::Get { alias } => commands::redirect(store.as_ref(), &alias)
            .instrument(info_span!("redirect", alias = %alias))
            .await
            .map(Output::Resolved),
        Command::Delete { alias } => commands::remove(store.as_ref(), &alias)
            .instrument(info_span!("delete", alias = %alias))
            .await
            .map(Output::Deleted),
    };

    store.close().await;

    let output = result?;
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display())),
        _ => Ok(()),
    }
}
