//! Command-line interface definitions.

use crate::section::SectionKind;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Marketing site renderer with editable-path markers
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented site.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Render the page into the output directory
    #[command(visible_alias = "b")]
    Build {
        /// Clean output directory completely before building
        #[arg(short, long)]
        clean: bool,
    },

    /// Start development server, re-rendering on every request
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the editable marks of the page as JSON
    #[command(visible_alias = "p")]
    Paths {
        /// Only this section
        #[arg(value_enum)]
        section: Option<SectionKind>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Apply one editor change and write it back to the config file
    #[command(visible_alias = "e")]
    Edit {
        /// Section the path belongs to
        #[arg(value_enum)]
        section: SectionKind,

        /// Editable path (e.g., `navigationItems[0].label`)
        path: String,

        /// New value
        value: String,

        /// Parse VALUE as JSON instead of a plain string
        #[arg(long)]
        json: bool,
    },
}
