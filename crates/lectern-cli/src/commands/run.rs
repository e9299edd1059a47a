//! Run command implementation.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail, ensure};
use clap::Args;
use colored::Colorize;

use lectern_core::model::ImageUpload;
use lectern_core::{BaseUrl, Credentials, Fixtures, Scenario};
use lectern_http::HttpApi;

use crate::output;
use crate::runner::{self, RunConfig};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Target server base URL
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Number of simultaneous virtual users
    #[arg(long, default_value_t = 1)]
    pub vus: u32,

    /// Total number of iterations, shared across virtual users
    #[arg(long, default_value_t = 1)]
    pub iterations: u64,

    /// Admin email for the bootstrap login
    #[arg(long, default_value = "admin@admin.com")]
    pub email: String,

    /// Admin password for the bootstrap login
    #[arg(long, default_value = "1234")]
    pub password: String,

    /// Image file to upload instead of the built-in placeholder
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Seconds to pause after each iteration
    #[arg(long, default_value_t = 1)]
    pub pause: u64,

    /// Write the run summary to this file as JSON
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

pub async fn run(args: RunArgs) -> Result<()> {
    ensure!(args.vus > 0, "--vus must be at least 1");

    let base = BaseUrl::new(&args.base_url).context("Invalid base URL")?;

    let mut fixtures = Fixtures::default();
    fixtures.admin = Credentials::new(&args.email, &args.password);
    if let Some(path) = &args.image {
        // Read once; every upload reuses these bytes.
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read image file {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "LecturizeIt.jpeg".to_string());
        fixtures.image = ImageUpload::new(file_name, bytes, "Description");
    }

    eprintln!(
        "{}",
        format!(
            "Running {} iterations with {} VUs against {}...",
            args.iterations, args.vus, base
        )
        .dimmed()
    );

    let api = Arc::new(HttpApi::new(base));
    let scenario = Arc::new(Scenario::new(fixtures));
    let config = RunConfig {
        vus: args.vus,
        iterations: args.iterations,
        pause: Duration::from_secs(args.pause),
    };

    let outcome =
        runner::run_scenario(api, scenario, Arc::new(output::ConsoleLogger), config).await;

    if let Some(path) = &args.summary {
        let json = serde_json::to_string_pretty(&outcome.summary)
            .context("Failed to serialize summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    }

    // An aborted run has no meaningful summary block; the rejected login
    // line is already on screen.
    if let Some(err) = outcome.auth_failure {
        bail!("authentication failed: {err}");
    }

    output::print_summary(&outcome.summary);
    if !outcome.summary.all_checks_passed() {
        bail!("{} checks failed", outcome.summary.checks_failed);
    }

    Ok(())
}
