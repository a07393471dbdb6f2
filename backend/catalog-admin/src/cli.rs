use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "catalog-admin")]
#[command(about = "Inspect and maintain the product category hierarchy")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (defaults to CATALOG_CONFIG_DIR, then ./.catalog)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// SQLite database file, overriding database.path from the config
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
