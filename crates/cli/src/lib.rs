//! This crate provides the command-line front-end for the `conneqt`
//! application: clap command parsing, config-file and environment handling,
//! and output rendering on top of the `conneqt-engine` pipeline.
//!
//! The main entry point is the `run` function, which the binary delegates
//! to. Other parts of the crate are considered internal and may change
//! without notice.

pub mod cli;
mod commands;
pub mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tokio::runtime::Runtime;

pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match config::load_config() {
        Ok(Some(cfg)) => config::apply_config_to_env(&cfg),
        Ok(None) => {}
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable config file");
        }
    }

    let cli = cli::Cli::parse();
    let rt = Runtime::new()?;
    rt.block_on(commands::dispatch(cli.command))
}
