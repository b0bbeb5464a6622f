mod app;
mod config;
mod error;
mod models;
mod pipeline;
mod sources;
mod storage;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::sources::HeadHunter;
use crate::storage::JsonStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobscout=info")),
        )
        .init();

    let config = Config::parse();

    let source = HeadHunter::new(&config.base_url, config.area)?;
    let storage = JsonStorage::new(&config.storage_path)?;

    app::run(&source, &storage).await;

    Ok(())
}
