//! postline - slug and page planning for a markdown blog.

mod build;
mod cli;
mod config;
mod content;
mod index;
mod logger;
mod page;
mod utils;

use anyhow::Result;
use build::{build_site, check_site};
use clap::Parser;
use cli::Cli;
use config::SiteConfig;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    if cli.is_check() {
        check_site(&config)
    } else {
        build_site(&config)
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
