//! CLI command definitions and handlers.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clearterms_client::{AnalysisClient, ClientConfig};
use tracing::debug;

pub mod analyze;
pub mod health;
pub mod interactive;

/// ClearTerms - Decode privacy policies
#[derive(Parser)]
#[command(name = "clearterms")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Analysis backend base URL (overrides CLEARTERMS_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides CLEARTERMS_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Also append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a privacy policy by URL or text
    Analyze(analyze::AnalyzeArgs),

    /// Analyze policies from an interactive prompt
    Interactive,

    /// Check that the analysis backend is up
    Health,
}

impl Cli {
    pub async fn execute(self) -> Result<ExitCode> {
        let config = self.client_config()?;
        debug!(base_url = %config.base_url, timeout = ?config.timeout, "Using analysis backend");
        let client = AnalysisClient::new(&config);

        match self.command {
            Commands::Analyze(args) => analyze::execute(args, client).await,
            Commands::Interactive => interactive::execute(client).await,
            Commands::Health => health::execute(&client).await,
        }
    }

    /// Environment settings with command-line overrides applied.
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = ClientConfig::from_env().context("Invalid client configuration")?;

        if let Some(url) = &self.api_url {
            config = config.with_base_url(url);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
