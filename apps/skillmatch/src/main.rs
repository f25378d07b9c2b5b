mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillmatch::config::Config;
use skillmatch::corpus::{load_jobs, seed_jobs};
use skillmatch::{Pipeline, ReportOptions};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging on stderr; stdout carries the JSON report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting skillmatch v{}", env!("CARGO_PKG_VERSION"));

    let pipeline = Pipeline::from_config(&config);

    let resume_text = std::fs::read_to_string(&cli.resume)
        .with_context(|| format!("Failed to read resume '{}'", cli.resume.display()))?;

    if cli.skills_only {
        let skills = pipeline.extract(&resume_text);
        println!("{}", serde_json::to_string_pretty(&skills)?);
        return Ok(());
    }

    let jobs = match &cli.jobs {
        Some(path) => load_jobs(path)
            .with_context(|| format!("Failed to load job corpus '{}'", path.display()))?,
        None => seed_jobs().context("Bundled seed corpus is invalid")?,
    };

    let options = ReportOptions {
        top_n: cli.top.or(config.top_n),
        include_tips: cli.tips,
    };
    let report = pipeline.analyze(&resume_text, &jobs, options);
    info!(
        skills = report.resume_skills.len(),
        matches = report.matches.len(),
        "Report {} ready",
        report.report_id
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
