use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::job::JobPosting;

/// Sample companies and roles, bundled so the matcher works without a job feed.
const SEED_JOBS_JSON: &str = include_str!("../data/seed_jobs.json");

/// Decodes a JSON array of job postings.
pub fn parse_jobs(json: &str) -> Result<Vec<JobPosting>, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON array of job postings from disk.
pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let jobs = parse_jobs(&raw)?;
    info!("Loaded {} jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}

/// The bundled seed corpus.
pub fn seed_jobs() -> Result<Vec<JobPosting>, AppError> {
    parse_jobs(SEED_JOBS_JSON)
}
