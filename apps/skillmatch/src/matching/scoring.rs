use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Blend weights for the match score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    /// Share of the lexical score from required skills.
    pub required: f64,
    /// Share of the lexical score from preferred skills.
    pub preferred: f64,
    /// Share of the final score from the lexical score.
    pub lexical: f64,
    /// Share of the final score from the similarity signal.
    pub semantic: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            required: 0.7,
            preferred: 0.3,
            lexical: 0.7,
            semantic: 0.3,
        }
    }
}

/// Scores and skill partitions for one resume against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub overall_score: f64,   // 0 – 100, 2 decimals
    pub required_score: f64,  // 0 – 100, 2 decimals
    pub preferred_score: f64, // 0 – 100, 2 decimals
    pub semantic_score: f64,  // 0 – 100, 2 decimals
    pub matching_required_skills: Vec<String>,
    pub matching_preferred_skills: Vec<String>,
    pub missing_required_skills: Vec<String>,
    pub missing_preferred_skills: Vec<String>,
    pub total_required_skills: usize,
    pub matched_required_count: usize,
    pub total_preferred_skills: usize,
    pub matched_preferred_count: usize,
}

/// Matched and missing halves of one job skill list, in the job's order.
#[derive(Debug, Default)]
struct Partition {
    matched: Vec<String>,
    missing: Vec<String>,
}

impl Partition {
    fn of(job_skills: &[String], resume: &HashSet<String>) -> Self {
        let mut partition = Partition::default();
        for skill in job_skills {
            let skill = skill.to_lowercase();
            if resume.contains(&skill) {
                partition.matched.push(skill);
            } else {
                partition.missing.push(skill);
            }
        }
        partition
    }

    fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Percentage of the list covered by the resume. An empty list scores 0.
    fn coverage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.matched.len() as f64 / total as f64 * 100.0
        }
    }
}

/// Combines exact-match coverage with a precomputed similarity score (0–100).
///
/// Algorithm:
/// 1. Lowercase everything and split required/preferred into matched and missing.
/// 2. required_score / preferred_score = coverage × 100 (0 for an empty list)
/// 3. lexical = required × w.required + preferred × w.preferred
/// 4. overall = lexical × w.lexical + semantic × w.semantic, rounded to 2 decimals
pub fn compute_match_score(
    resume_skills: &[String],
    required_skills: &[String],
    preferred_skills: &[String],
    semantic_score: f64,
    weights: &MatchWeights,
) -> MatchScore {
    let resume: HashSet<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();

    let required = Partition::of(required_skills, &resume);
    let preferred = Partition::of(preferred_skills, &resume);

    let required_score = required.coverage();
    let preferred_score = preferred.coverage();
    let lexical = required_score * weights.required + preferred_score * weights.preferred;
    let overall = (lexical * weights.lexical + semantic_score * weights.semantic).clamp(0.0, 100.0);

    MatchScore {
        overall_score: round2(overall),
        required_score: round2(required_score),
        preferred_score: round2(preferred_score),
        semantic_score: round2(semantic_score),
        total_required_skills: required.total(),
        matched_required_count: required.matched.len(),
        total_preferred_skills: preferred.total(),
        matched_preferred_count: preferred.matched.len(),
        matching_required_skills: required.matched,
        missing_required_skills: required.missing,
        matching_preferred_skills: preferred.matched,
        missing_preferred_skills: preferred.missing,
    }
}

/// Rounds to two decimals from the exact binary value, ties to even (`74.125` → `74.12`).
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reference_example_partitions() {
        let score = compute_match_score(
            &skills(&["python", "sql", "git"]),
            &skills(&["python", "sql", "git", "rest api", "flask"]),
            &skills(&["docker", "aws"]),
            0.0,
            &MatchWeights::default(),
        );
        assert_eq!(score.required_score, 60.0);
        assert_eq!(score.preferred_score, 0.0);
        assert_eq!(score.missing_required_skills, vec!["rest api", "flask"]);
        assert_eq!(score.matching_required_skills, vec!["python", "sql", "git"]);
        assert_eq!(score.missing_preferred_skills, vec!["docker", "aws"]);
        assert_eq!(score.total_required_skills, 5);
        assert_eq!(score.matched_required_count, 3);
        assert_eq!(score.total_preferred_skills, 2);
        assert_eq!(score.matched_preferred_count, 0);
        // 60 × 0.7 = 42 lexical, × 0.7 = 29.4
        assert_eq!(score.overall_score, 29.4);
    }

    #[test]
    fn test_matching_ignores_case() {
        let score = compute_match_score(
            &skills(&["Python", "DOCKER"]),
            &skills(&["python"]),
            &skills(&["Docker"]),
            0.0,
            &MatchWeights::default(),
        );
        assert_eq!(score.required_score, 100.0);
        assert_eq!(score.preferred_score, 100.0);
        assert_eq!(score.matching_preferred_skills, vec!["docker"]);
    }

    #[test]
    fn test_empty_lists_score_zero() {
        let score = compute_match_score(
            &skills(&["python"]),
            &[],
            &[],
            0.0,
            &MatchWeights::default(),
        );
        assert_eq!(score.required_score, 0.0);
        assert_eq!(score.preferred_score, 0.0);
        assert_eq!(score.overall_score, 0.0);
    }

    #[test]
    fn test_semantic_share_is_thirty_percent() {
        let score = compute_match_score(
            &skills(&["python"]),
            &skills(&["python"]),
            &skills(&["python"]),
            100.0,
            &MatchWeights::default(),
        );
        assert_eq!(score.overall_score, 100.0);

        let score = compute_match_score(&[], &skills(&["java"]), &[], 50.0, &MatchWeights::default());
        assert_eq!(score.overall_score, 15.0);
    }

    #[test]
    fn test_duplicate_job_skills_are_kept() {
        let score = compute_match_score(
            &skills(&["python"]),
            &skills(&["python", "Python", "java"]),
            &[],
            0.0,
            &MatchWeights::default(),
        );
        assert_eq!(score.total_required_skills, 3);
        assert_eq!(score.matched_required_count, 2);
        assert_eq!(score.required_score, 66.67);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(29.4), 29.4);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_half_cent_ties() {
        assert_eq!(round2(74.125), 74.12);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        // 2.675 is stored just below the tie
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.005), 1.0);
    }

    #[test]
    fn test_overall_score_on_half_cent_tie() {
        // required 100, preferred 5/8 = 62.5 → lexical 88.75; 88.75 × 0.7 + 40 × 0.3 = 74.125
        let score = compute_match_score(
            &skills(&["python", "a1", "a2", "a3", "a4", "a5"]),
            &skills(&["python"]),
            &skills(&["a1", "a2", "a3", "a4", "a5", "b1", "b2", "b3"]),
            40.0,
            &MatchWeights::default(),
        );
        assert_eq!(score.preferred_score, 62.5);
        assert_eq!(score.overall_score, 74.12);
    }

    #[test]
    fn test_default_weights() {
        let w = MatchWeights::default();
        assert!((w.required + w.preferred - 1.0).abs() < f64::EPSILON);
        assert!((w.lexical + w.semantic - 1.0).abs() < f64::EPSILON);
    }
}
