//! catalog-admin - category hierarchy maintenance
//!
//! # Examples
//!
//! ```bash
//! # Everything below a category
//! catalog-admin descendants apparel --pretty
//!
//! # Check a parent change before saving it
//! catalog-admin validate-parents shoes apparel sale
//!
//! # Fix drifted product counts
//! catalog-admin rebuild-counts
//! ```

use catalog_admin::{AdminError, AdminResult, Cli, execute, logger, render};
use catalog_config::Config;
use catalog_hierarchy::CategoryHierarchy;
use catalog_store::SqliteStore;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AdminResult<String> {
    // Load and validate configuration
    let config = match cli.config_dir {
        Some(ref dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    config.validate()?;

    // Ensure log directory exists
    let log_file_path = config.log_file_path();
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| AdminError::Io {
            path: log_dir.to_path_buf(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting catalog-admin v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = cli.database.unwrap_or_else(|| config.database_path());
    let store = SqliteStore::connect(&database_path, config.database.max_connections).await?;
    let hierarchy = CategoryHierarchy::with_config(Arc::new(store), config.hierarchy.clone());

    let value = execute(&hierarchy, cli.command).await?;
    render(&value, cli.pretty)
}
