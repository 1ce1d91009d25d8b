mod cli;
mod settings;

use anyhow::Context;
use clap::Parser;
use cli::{App, Cli};
use makan_rental::session::{FileStore, Session};
use makan_rental::Catalog;
use settings::Settings;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?.with_data_dir(cli.data_dir.clone());

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("🏠 Makan on Rental");
    debug!("Settings: {:?}", settings);

    let store = FileStore::in_dir(&settings.data_dir);
    let session = Session::load(store).context("Failed to restore session")?;

    let mut app = App {
        settings,
        catalog: Catalog::sample(),
        session,
    };

    cli::run(&mut app, cli.command).await
}
