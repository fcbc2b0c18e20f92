//! One-shot analysis command.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use clearterms_client::AnalysisClient;
use clearterms_core::{ClearTermsError, FormController, FormStatus, InputMode};
use colored::Colorize;
use tracing::{debug, info};

use crate::output;

#[derive(Args)]
#[command(group(ArgGroup::new("input").required(true).args(["url", "text", "file"])))]
pub struct AnalyzeArgs {
    /// URL of the policy page
    #[arg(long)]
    pub url: Option<String>,

    /// Policy text to analyze
    #[arg(long)]
    pub text: Option<String>,

    /// Read policy text from a file ("-" for stdin)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the raw analysis as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, client: AnalysisClient) -> Result<ExitCode> {
    let mut controller = FormController::new(client);
    let form = controller.form_mut();

    if let Some(url) = args.url {
        form.set_mode(InputMode::Url);
        form.set_url(url);
    } else if let Some(text) = args.text {
        form.set_mode(InputMode::Text);
        form.set_text(text);
    } else if let Some(path) = args.file {
        form.set_mode(InputMode::Text);
        form.set_text(read_policy_text(&path)?);
    }

    let spinner = output::spinner("Analyzing policy...");
    let outcome = controller.submit().await;
    spinner.finish_and_clear();

    if let Ok(status) = &outcome {
        info!(status = status.as_str(), json = args.json, "Analysis finished");
    }

    match outcome {
        Ok(FormStatus::Success(analysis)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(analysis)?);
            } else {
                output::print_analysis(analysis);
            }
            Ok(ExitCode::SUCCESS)
        }
        Ok(FormStatus::Failed(message)) => {
            if args.json {
                println!("{}", serde_json::json!({ "detail": message }));
            } else {
                output::print_error_panel(message);
            }
            Ok(ExitCode::from(1))
        }
        Ok(status) => anyhow::bail!("Submission ended in unexpected state '{}'", status.as_str()),
        Err(ClearTermsError::ValidationError(reason)) => {
            eprintln!("{} {}", "✗".red().bold(), reason.dimmed());
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}

fn read_policy_text(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Reading policy text");

    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read policy text from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read policy text from {}", path.display()))
}
