//! CLI for the fwsync firmware downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fwsync_core::config;
use std::path::PathBuf;

use commands::{run_list, run_sync};

/// Top-level CLI for the fwsync firmware downloader.
#[derive(Debug, Parser)]
#[command(name = "fwsync")]
#[command(about = "fwsync: fetch the vendor firmware manifest and download new binaries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the manifest and download all firmware files not yet present.
    /// This is the default when no subcommand is given.
    Sync {
        /// Directory under which the date-stamped download directory is created.
        #[arg(long, value_name = "DIR")]
        download_root: Option<PathBuf>,

        /// Override the manifest URL from the config file.
        #[arg(long, value_name = "URL")]
        manifest_url: Option<String>,
    },

    /// Fetch the manifest and list the firmware URLs without downloading.
    List {
        /// Override the manifest URL from the config file.
        #[arg(long, value_name = "URL")]
        manifest_url: Option<String>,
    },
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let command = cli.command.unwrap_or(CliCommand::Sync {
        download_root: None,
        manifest_url: None,
    });

    match command {
        CliCommand::Sync {
            download_root,
            manifest_url,
        } => {
            if let Some(root) = download_root {
                cfg.download_root = root;
            }
            if let Some(url) = manifest_url {
                cfg.manifest_url = url;
            }
            run_sync(&cfg)?;
        }
        CliCommand::List { manifest_url } => {
            if let Some(url) = manifest_url {
                cfg.manifest_url = url;
            }
            run_list(&cfg)?;
        }
    }

    Ok(())
}
