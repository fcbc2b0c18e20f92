//! Interactive prompt loop.
//!
//! Mirrors the single-page form: pick a mode, fill its field, submit, read
//! the report. Both fields keep their values across mode switches.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clearterms_client::AnalysisClient;
use clearterms_core::{AnalysisForm, ClearTermsError, FormController, FormStatus, InputMode};
use colored::Colorize;
use dialoguer::{Input, Select};
use tracing::debug;

use crate::output;

const QUIT: &str = "Quit";

pub async fn execute(client: AnalysisClient) -> Result<ExitCode> {
    println!(
        "{} Analyzing policies via {}",
        "→".blue().bold(),
        client.base_url().cyan()
    );
    println!();

    let mut controller = FormController::new(client);
    let items = [InputMode::Url.label(), InputMode::Text.label(), QUIT];

    loop {
        let default = match controller.form().mode() {
            InputMode::Url => 0,
            InputMode::Text => 1,
        };
        let choice = Select::new()
            .with_prompt("What do you want to analyze?")
            .items(&items)
            .default(default)
            .interact()
            .context("Failed to read selection")?;

        let form = controller.form_mut();
        match choice {
            0 => {
                form.set_mode(InputMode::Url);
                let url = prompt_url(form)?;
                form.set_url(url);
            }
            1 => {
                form.set_mode(InputMode::Text);
                if let Some(text) = prompt_text()? {
                    form.set_text(text);
                }
            }
            _ => {
                debug!("Interactive session ended");
                break;
            }
        }

        let spinner = output::spinner("Analyzing policy...");
        let outcome = controller.submit().await;
        spinner.finish_and_clear();

        println!();
        match outcome {
            Ok(FormStatus::Success(analysis)) => output::print_analysis(analysis),
            Ok(FormStatus::Failed(message)) => output::print_error_panel(message),
            Ok(_) => {}
            Err(ClearTermsError::ValidationError(reason)) => {
                println!("{} {}", "✗".red().bold(), reason.dimmed());
            }
            Err(e) => return Err(e.into()),
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

fn prompt_url(form: &AnalysisForm) -> Result<String> {
    Input::new()
        .with_prompt("Policy URL")
        .with_initial_text(form.url())
        .allow_empty(true)
        .interact_text()
        .context("Failed to read URL")
}

/// Collect pasted lines until an empty line. `None` keeps the previous text.
fn prompt_text() -> Result<Option<String>> {
    println!(
        "{} (paste it, empty line to finish; empty to reuse the previous text):",
        "Policy text".bold()
    );

    let mut lines = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read policy text")?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }

    if lines.is_empty() {
        Ok(None)
    } else {
        Ok(Some(lines.join("\n")))
    }
}
