//! Job matcher. Scores one skill list against job postings and ranks them.
//!
//! The lexical part is exact label overlap. The semantic part comes from the configured
//! `SimilarityScorer`; when that backend errors the matcher recomputes the signal with word
//! overlap, so callers never see a failure.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::matching::scoring::{compute_match_score, MatchScore, MatchWeights};
use crate::matching::similarity::{SimilarityBackend, SimilarityScorer, WordOverlapScorer};
use crate::matching::tips::improvement_tips;
use crate::models::job::JobPosting;

const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Scored outcome of one resume against one job, with the job's descriptive fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: i64,
    pub company_id: Option<i64>,
    pub company_name: String,
    pub company_logo: Option<String>,
    pub company_website: Option<String>,
    pub job_title: String,
    pub job_description: String,
    pub experience_level: String,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    #[serde(flatten)]
    pub score: MatchScore,
}

impl MatchResult {
    /// Tips for closing the gap on this job's required skills.
    pub fn improvement_tips(&self) -> Vec<String> {
        improvement_tips(&self.score.missing_required_skills, &self.job_title)
    }
}

#[derive(Clone)]
pub struct JobMatcher {
    similarity: Arc<dyn SimilarityScorer>,
    weights: MatchWeights,
}

impl Default for JobMatcher {
    fn default() -> Self {
        Self::new(SimilarityBackend::default())
    }
}

impl JobMatcher {
    pub fn new(backend: SimilarityBackend) -> Self {
        Self::with_scorer(backend.build())
    }

    pub fn with_scorer(similarity: Arc<dyn SimilarityScorer>) -> Self {
        Self {
            similarity,
            weights: MatchWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: MatchWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn backend_name(&self) -> &'static str {
        self.similarity.name()
    }

    /// Similarity between the resume skills and the job's combined skill list, 0–100.
    /// Either list empty → 0. Backend errors fall back to word overlap.
    pub fn semantic_score(&self, resume_skills: &[String], job_skills: &[String]) -> f64 {
        if resume_skills.is_empty() || job_skills.is_empty() {
            return 0.0;
        }

        match self.similarity.similarity(resume_skills, job_skills) {
            Ok(score) => score,
            Err(e) => {
                warn!(
                    backend = self.similarity.name(),
                    code = e.code(),
                    "similarity backend failed, using word overlap: {e}"
                );
                WordOverlapScorer::jaccard(resume_skills, job_skills)
            }
        }
    }

    pub fn score(&self, resume_skills: &[String], job: &JobPosting) -> MatchResult {
        let job_skills: Vec<String> = job
            .required_skills
            .iter()
            .chain(job.preferred_skills.iter())
            .cloned()
            .collect();
        let semantic = self.semantic_score(resume_skills, &job_skills);

        let score = compute_match_score(
            resume_skills,
            &job.required_skills,
            &job.preferred_skills,
            semantic,
            &self.weights,
        );

        MatchResult {
            job_id: job.id,
            company_id: job.company_id,
            company_name: job
                .company_name
                .clone()
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
            company_logo: job.company_logo.clone(),
            company_website: job.company_website.clone(),
            job_title: job.title.clone(),
            job_description: job.description.clone(),
            experience_level: job.experience_level.clone(),
            location: job.location.clone(),
            salary_range: job.salary_range.clone(),
            score,
        }
    }

    /// Scores every job independently and sorts by overall score, highest first.
    /// Jobs with equal scores keep their corpus order.
    pub fn rank(&self, resume_skills: &[String], jobs: &[JobPosting]) -> Vec<MatchResult> {
        let mut matches: Vec<MatchResult> = jobs
            .par_iter()
            .map(|job| self.score(resume_skills, job))
            .collect();

        matches.sort_by(|a, b| b.score.overall_score.total_cmp(&a.score.overall_score));

        debug!(
            jobs = jobs.len(),
            backend = self.similarity.name(),
            top_score = matches.first().map(|m| m.score.overall_score),
            "ranked job corpus"
        );

        matches
    }
}
