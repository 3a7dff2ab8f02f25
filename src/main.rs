//! wodlog - personal fitness tracker
//!
//! Main entry point for the application.

use anyhow::Context;
use dialoguer::Confirm;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wodlog::storage::config::get_config_path;
use wodlog::storage::{load_config, save_config, Database};
use wodlog::ui;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting wodlog v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("failed to load configuration")?;

    // Persist defaults on first run so the operator has a file to edit
    if !get_config_path().exists() {
        if let Err(e) = save_config(&config) {
            tracing::warn!("Could not write default config: {}", e);
        }
    }

    let db = Database::open(&config.database_path).with_context(|| {
        format!(
            "failed to open database at {}",
            config.database_path.display()
        )
    })?;

    // Schema creation is idempotent, so re-initializing an existing
    // database is safe.
    if !config.prompt_for_init
        || Confirm::new()
            .with_prompt("Initialize the database schema?")
            .default(true)
            .interact()?
    {
        db.initialize().context("failed to initialize schema")?;
        println!("Database initialized successfully!");
    }

    ui::run(&db)?;

    db.close().context("failed to close database")?;

    Ok(())
}
