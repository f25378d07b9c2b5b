//! Similarity scorer: a secondary bag-of-words signal between two skill lists.
//!
//! Default: `TfIdfCosineScorer` (term vectors, cosine).
//! Fallback: `WordOverlapScorer` (Jaccard over words). Always available, never fails.
//!
//! The matcher holds an `Arc<dyn SimilarityScorer>` chosen at startup from config and falls
//! back to word overlap whenever the configured backend errors.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores how alike two skill lists are, on a 0–100 scale.
///
/// Implementations may fail; the caller decides how to degrade.
pub trait SimilarityScorer: Send + Sync {
    fn similarity(&self, resume_skills: &[String], job_skills: &[String])
        -> Result<f64, AppError>;

    /// Backend label, reported alongside results for transparency.
    fn name(&self) -> &'static str;
}

/// Which backend to build. Parsed from `SIMILARITY_BACKEND`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityBackend {
    #[default]
    TfIdf,
    WordOverlap,
}

impl SimilarityBackend {
    pub fn build(self) -> Arc<dyn SimilarityScorer> {
        match self {
            SimilarityBackend::TfIdf => Arc::new(TfIdfCosineScorer),
            SimilarityBackend::WordOverlap => Arc::new(WordOverlapScorer),
        }
    }
}

impl FromStr for SimilarityBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tfidf" | "tf-idf" => Ok(SimilarityBackend::TfIdf),
            "overlap" | "jaccard" => Ok(SimilarityBackend::WordOverlap),
            other => Err(AppError::Config(format!(
                "unknown similarity backend '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SimilarityBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityBackend::TfIdf => write!(f, "tfidf"),
            SimilarityBackend::WordOverlap => write!(f, "overlap"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// TfIdfCosineScorer
// ────────────────────────────────────────────────────────────────────────────

/// Tokens are runs of two or more word characters, so `c`, `r` and `c++` carry no terms.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Vectorizes each skill list as one document over the two-document vocabulary.
///
/// Weights are raw term frequency × smoothed idf, `ln((1 + n) / (1 + df)) + 1`, and each vector
/// is l2-normalized before the dot product. A vocabulary with no terms at all is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdfCosineScorer;

impl SimilarityScorer for TfIdfCosineScorer {
    fn similarity(
        &self,
        resume_skills: &[String],
        job_skills: &[String],
    ) -> Result<f64, AppError> {
        let docs = [
            term_counts(&resume_skills.join(" ")),
            term_counts(&job_skills.join(" ")),
        ];

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in &docs {
            for term in doc.keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        if doc_freq.is_empty() {
            return Err(AppError::Similarity(
                "empty vocabulary; skill lists contain no indexable terms".to_string(),
            ));
        }

        let n = docs.len() as f64;
        let idf = |term: &str| -> f64 {
            let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        };

        let weigh = |doc: &HashMap<String, usize>| -> HashMap<String, f64> {
            let mut weights: HashMap<String, f64> = doc
                .iter()
                .map(|(term, &count)| (term.clone(), count as f64 * idf(term.as_str())))
                .collect();
            let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                weights.values_mut().for_each(|w| *w /= norm);
            }
            weights
        };

        let resume_vec = weigh(&docs[0]);
        let job_vec = weigh(&docs[1]);

        let dot: f64 = resume_vec
            .iter()
            .filter_map(|(term, w)| job_vec.get(term).map(|v| w * v))
            .sum();

        Ok((dot * 100.0).clamp(0.0, 100.0))
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}

fn term_counts(text: &str) -> HashMap<String, usize> {
    let lower = text.to_lowercase();
    let mut counts = HashMap::new();
    for m in TOKEN_RE.find_iter(&lower) {
        *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

// ────────────────────────────────────────────────────────────────────────────
// WordOverlapScorer (fallback)
// ────────────────────────────────────────────────────────────────────────────

/// Jaccard similarity between the whitespace-split words of both lists.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordOverlapScorer;

impl WordOverlapScorer {
    pub fn jaccard(resume_skills: &[String], job_skills: &[String]) -> f64 {
        let resume_words = word_set(resume_skills);
        let job_words = word_set(job_skills);

        if job_words.is_empty() {
            return 0.0;
        }

        let union = resume_words.union(&job_words).count();
        if union == 0 {
            return 0.0;
        }
        let intersection = resume_words.intersection(&job_words).count();

        intersection as f64 / union as f64 * 100.0
    }
}

impl SimilarityScorer for WordOverlapScorer {
    fn similarity(
        &self,
        resume_skills: &[String],
        job_skills: &[String],
    ) -> Result<f64, AppError> {
        Ok(Self::jaccard(resume_skills, job_skills))
    }

    fn name(&self) -> &'static str {
        "overlap"
    }
}

fn word_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .flat_map(|skill| skill.split_whitespace())
        .map(str::to_lowercase)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
