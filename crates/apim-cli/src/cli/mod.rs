//! CLI for the APIM JSON API fetch client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use apim_core::config;
use std::path::PathBuf;

use commands::{run_get, run_process};

/// Top-level CLI for the APIM client.
#[derive(Debug, Parser)]
#[command(name = "apim")]
#[command(about = "APIM: fetch JSON from an API and post-process records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch base URL + endpoint with one GET and print the JSON body.
    Get {
        /// Endpoint path, appended verbatim to the base URL (e.g. "/users").
        endpoint: String,

        /// Base URL; overrides the config value.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Extra request header as "Name: value". Repeatable.
        #[arg(long = "header", short = 'H', value_name = "HEADER")]
        headers: Vec<String>,

        /// Mark each record of an array response as processed before printing.
        #[arg(long)]
        process: bool,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Mark each record in a JSON array of objects as processed.
    Process {
        /// Path to the input file; "-" or omitted reads stdin.
        path: Option<PathBuf>,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                endpoint,
                base_url,
                headers,
                process,
                pretty,
            } => run_get(&cfg, &endpoint, base_url.as_deref(), &headers, process, pretty).await?,
            CliCommand::Process { path, pretty } => run_process(path.as_deref(), pretty)?,
        }

        Ok(())
    }
}
