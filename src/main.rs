//! wmsite - marketing site renderer with editable-path markers.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod editable;
mod embed;
mod icon;
mod logger;
mod nav;
mod render;
mod section;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, edit::EditRequest, init::InitMode};
use config::SiteConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name } => init(&cli, name.as_deref()),
        Commands::Build { .. } => cli::build::build_site(&load(&cli)?).map(|_| ()),
        Commands::Serve { .. } => serve(load(&cli)?),
        Commands::Paths { section, pretty } => {
            cli::paths::print_paths(&load(&cli)?, *section, *pretty)
        }
        Commands::Edit {
            section,
            path,
            value,
            json,
        } => {
            let request = EditRequest::parse(*section, path, value, *json)?;
            cli::edit::edit_site(&load(&cli)?, request)
        }
    }
}

fn load(cli: &Cli) -> Result<SiteConfig> {
    let config = SiteConfig::load(cli)?;
    config::describe(&config);
    Ok(config)
}

fn init(cli: &Cli, name: Option<&std::path::Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };
    cli::init::new_site(&root, &cli.config, mode)
}

fn serve(config: SiteConfig) -> Result<()> {
    let server = cli::serve::bind_server(&config)?;
    debug!("serve"; "config: {}", config.config_path.display());
    server.run(config)
}
