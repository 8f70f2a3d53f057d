//! `repoconfig`: builds RepoSense configuration files from an intake document.
//!
//! # Usage
//!
//! ```bash
//! # Write a starter intake document
//! repoconfig init
//!
//! # Build every file the document describes and bundle them
//! repoconfig create repoconfig.toml --archive
//!
//! # Bundle existing files
//! repoconfig package repo-config.csv config.json --output configs.zip
//! ```

mod args;
mod commands;
mod logging;

use args::{Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Init(args) => commands::init::run(args).await,
        Commands::Create(args) => commands::create::run(args).await,
        Commands::Package(args) => commands::package::run(args),
    }
}
