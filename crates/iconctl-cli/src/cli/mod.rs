//! CLI for iconctl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use iconctl_core::config::{self, IconctlConfig};
use std::path::PathBuf;

use commands::{run_config, run_fetch, run_rename};

/// Top-level CLI for iconctl.
#[derive(Debug, Parser)]
#[command(name = "iconctl")]
#[command(about = "Fetch connector icons from the CDN and rename them by institution", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/iconctl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download icons for consecutive identifiers until the CDN runs out.
    Fetch {
        /// Output directory (default: `output_dir` from config).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// First identifier to request (default: `fetch.start_id`).
        #[arg(long, value_name = "ID")]
        start: Option<u64>,
        /// Last identifier to request, inclusive (default: scan until the first miss).
        #[arg(long, value_name = "ID")]
        end: Option<u64>,
    },

    /// Rename `{id}.svg` files to `{id}_{institution}.svg` using web search.
    Rename {
        /// Directory holding the icons (default: `output_dir` from config).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// Report what would be renamed without touching any file.
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

fn load_config(path: Option<&PathBuf>) -> Result<IconctlConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { dir, start, end } => run_fetch(&cfg, dir, start, end)?,
            CliCommand::Rename { dir, dry_run } => run_rename(&cfg, dir, dry_run)?,
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
