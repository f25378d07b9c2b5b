//! Resume → ranked job report. Composes the extractor and the matcher chosen from config.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::extraction::{HeuristicChunker, SkillExtractor};
use crate::matching::{JobMatcher, MatchResult};
use crate::models::job::JobPosting;

/// Report shaping options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Keep only the best `n` matches.
    pub top_n: Option<usize>,
    /// Attach improvement tips to every match.
    pub include_tips: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(flatten)]
    pub result: MatchResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_tips: Option<Vec<String>>,
}

/// Full output of one resume analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub similarity_backend: String,
    pub resume_skills: Vec<String>,
    pub total_jobs: usize,
    pub matches: Vec<RankedMatch>,
}

/// Extractor and matcher, built once and shared across calls.
#[derive(Clone, Default)]
pub struct Pipeline {
    pub extractor: SkillExtractor,
    pub matcher: JobMatcher,
}

impl Pipeline {
    pub fn new(extractor: SkillExtractor, matcher: JobMatcher) -> Self {
        Self { extractor, matcher }
    }

    pub fn from_config(config: &Config) -> Self {
        let extractor = if config.phrase_enrichment {
            SkillExtractor::with_chunker(Arc::new(HeuristicChunker))
        } else {
            SkillExtractor::new()
        };
        let matcher = JobMatcher::new(config.similarity_backend);

        info!(
            similarity = matcher.backend_name(),
            phrase_enrichment = extractor.has_chunker(),
            "pipeline initialized"
        );

        Self::new(extractor, matcher)
    }

    pub fn extract(&self, resume_text: &str) -> Vec<String> {
        self.extractor.extract(resume_text)
    }

    pub fn analyze(
        &self,
        resume_text: &str,
        jobs: &[JobPosting],
        options: ReportOptions,
    ) -> MatchReport {
        let resume_skills = self.extract(resume_text);
        let mut ranked = self.matcher.rank(&resume_skills, jobs);
        if let Some(n) = options.top_n {
            ranked.truncate(n);
        }

        let matches = ranked
            .into_iter()
            .map(|result| RankedMatch {
                improvement_tips: options.include_tips.then(|| result.improvement_tips()),
                result,
            })
            .collect();

        MatchReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            similarity_backend: self.matcher.backend_name().to_string(),
            resume_skills,
            total_jobs: jobs.len(),
            matches,
        }
    }
}
