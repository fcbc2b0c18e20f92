//! Backend health check.

use std::process::ExitCode;

use anyhow::Result;
use clearterms_client::AnalysisClient;
use colored::Colorize;

pub async fn execute(client: &AnalysisClient) -> Result<ExitCode> {
    if client.health_check().await {
        println!("  {} {:15} {}", "✓".green(), "backend", client.base_url().dimmed());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "  {} {:15} {}",
            "✗".red(),
            "backend",
            format!("unreachable at {}", client.base_url()).dimmed()
        );
        Ok(ExitCode::from(1))
    }
}
