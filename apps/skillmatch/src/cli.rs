use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "skillmatch",
    about = "Extract skills from a plain-text resume and rank job postings against them",
    version
)]
pub struct Cli {
    /// Plain-text resume to analyze
    pub resume: PathBuf,

    /// JSON array of job postings (defaults to the bundled seed corpus)
    #[arg(long)]
    pub jobs: Option<PathBuf>,

    /// Only report the best N matches (overrides MATCH_TOP_N)
    #[arg(long)]
    pub top: Option<usize>,

    /// Attach improvement tips to every match
    #[arg(long)]
    pub tips: bool,

    /// Print the extracted skills and skip matching
    #[arg(long, conflicts_with_all = ["jobs", "top", "tips"])]
    pub skills_only: bool,
}
