use std::collections::BTreeSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::phrases::{marker_phrases, PhraseChunker};
use crate::extraction::section::{find_skills_section, labels_in_section};
use crate::extraction::vocabulary::{is_plain_word, SOFT_SKILLS, TECHNICAL_SKILLS};

/// A vocabulary label paired with the pattern that detects it in lowercased text.
struct SkillPattern {
    label: &'static str,
    regex: Regex,
}

/// Plain words get `\b` anchors. Labels with symbols or spaces (`c++`, `ci/cd`, `rest api`)
/// need the neighbouring characters to be non-word characters or the text edge instead, since
/// `\b` next to `+` or `/` does not mean what it looks like.
fn build_pattern(label: &'static str) -> SkillPattern {
    let escaped = regex::escape(label);
    let source = if is_plain_word(label) {
        format!(r"\b{escaped}\b")
    } else {
        format!(r"(?:^|\W){escaped}(?:\W|$)")
    };
    SkillPattern {
        label,
        regex: Regex::new(&source).expect("vocabulary labels compile to valid patterns"),
    }
}

static TECHNICAL_PATTERNS: Lazy<Vec<SkillPattern>> =
    Lazy::new(|| TECHNICAL_SKILLS.iter().copied().map(build_pattern).collect());

// Soft skills are alphabetic phrases, so strict word boundaries always apply.
static SOFT_PATTERNS: Lazy<Vec<SkillPattern>> = Lazy::new(|| {
    SOFT_SKILLS
        .iter()
        .map(|&label| SkillPattern {
            label,
            regex: Regex::new(&format!(r"\b{}\b", regex::escape(label)))
                .expect("vocabulary labels compile to valid patterns"),
        })
        .collect()
});

/// Lowercases and trims a skill label (`" Python "` → `"python"`).
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Turns resume text into a sorted, deduplicated list of skill labels.
///
/// Dictionary matching is deterministic. The optional phrase chunker only ever adds labels, and
/// its failures never change the dictionary result.
#[derive(Clone, Default)]
pub struct SkillExtractor {
    chunker: Option<Arc<dyn PhraseChunker>>,
}

impl SkillExtractor {
    /// Dictionary-only extractor.
    pub fn new() -> Self {
        Self { chunker: None }
    }

    /// Extractor with noun-phrase enrichment through `chunker`.
    pub fn with_chunker(chunker: Arc<dyn PhraseChunker>) -> Self {
        Self {
            chunker: Some(chunker),
        }
    }

    pub fn has_chunker(&self) -> bool {
        self.chunker.is_some()
    }

    pub fn extract(&self, resume_text: &str) -> Vec<String> {
        if resume_text.trim().is_empty() {
            return Vec::new();
        }

        let text_lower = resume_text.to_lowercase();
        let mut skills: BTreeSet<String> = BTreeSet::new();

        for pattern in TECHNICAL_PATTERNS.iter().chain(SOFT_PATTERNS.iter()) {
            if pattern.regex.is_match(&text_lower) {
                skills.insert(pattern.label.to_string());
            }
        }
        let dictionary_count = skills.len();

        let section = find_skills_section(resume_text);
        if !section.is_empty() {
            skills.extend(labels_in_section(&section));
        }
        let section_count = skills.len() - dictionary_count;

        let mut phrase_count = 0;
        if let Some(chunker) = &self.chunker {
            let before = skills.len();
            skills.extend(marker_phrases(chunker.as_ref(), resume_text));
            phrase_count = skills.len() - before;
        }

        debug!(
            chars = resume_text.len(),
            dictionary = dictionary_count,
            section = section_count,
            phrases = phrase_count,
            "extracted {} skills",
            skills.len()
        );

        skills.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::extraction::phrases::HeuristicChunker;

    const SAMPLE: &str =
        "Experienced in Python, Django and REST API development. Strong leadership skills.";

    struct FailingChunker;

    impl PhraseChunker for FailingChunker {
        fn noun_phrases(&self, _text: &str) -> Result<Vec<String>, AppError> {
            Err(AppError::Chunker("parser crashed".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_sample_resume_extracts_expected_skills() {
        let skills = SkillExtractor::new().extract(SAMPLE);
        for expected in ["python", "django", "rest api", "leadership"] {
            assert!(
                skills.contains(&expected.to_string()),
                "missing {expected} in {skills:?}"
            );
        }
    }

    #[test]
    fn test_every_label_matches_as_standalone_token() {
        let extractor = SkillExtractor::new();
        for label in TECHNICAL_SKILLS.iter().chain(SOFT_SKILLS.iter()) {
            let text = format!("I have worked with {label} for years");
            let skills = extractor.extract(&text);
            assert!(
                skills.iter().any(|s| s == label),
                "label {label:?} not found in {skills:?}"
            );
        }
    }

    #[test]
    fn test_matching_is_case_insensitive_and_canonical() {
        let skills = SkillExtractor::new().extract("Deployed with KUBERNETES and Node.JS");
        assert!(skills.contains(&"kubernetes".to_string()));
        assert!(skills.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        let skills = SkillExtractor::new().extract("Frontend work in JavaScript only");
        assert!(skills.contains(&"javascript".to_string()));
        assert!(!skills.contains(&"java".to_string()));
    }

    #[test]
    fn test_single_letter_label_matches_inside_symbol_label() {
        // `+` is a word boundary, so "c" is reported alongside "c++"
        let skills = SkillExtractor::new().extract("Systems programming in C++");
        assert!(skills.contains(&"c++".to_string()));
        assert!(skills.contains(&"c".to_string()));
    }

    #[test]
    fn test_symbol_labels_need_non_word_neighbours() {
        let skills = SkillExtractor::new().extract("Pipelines with ci/cd. Also ci/cdx tooling");
        assert!(skills.contains(&"ci/cd".to_string()));

        let skills = SkillExtractor::new().extract("Pipelines with xci/cdx tooling");
        assert!(!skills.contains(&"ci/cd".to_string()));
    }

    #[test]
    fn test_empty_and_whitespace_text_yield_nothing() {
        let extractor = SkillExtractor::new();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   \n\t  ").is_empty());
    }

    #[test]
    fn test_output_is_sorted_and_deduplicated() {
        let skills = SkillExtractor::new()
            .extract("Skills\nPython, Docker, Python\n\nPython and docker again");
        let mut sorted = skills.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(skills, sorted);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = SkillExtractor::with_chunker(Arc::new(HeuristicChunker));
        assert_eq!(extractor.extract(SAMPLE), extractor.extract(SAMPLE));
    }

    #[test]
    fn test_dictionary_labels_are_vocabulary_members() {
        let skills = SkillExtractor::new().extract(SAMPLE);
        for skill in &skills {
            assert!(crate::extraction::vocabulary::is_known_label(skill));
        }
    }

    #[test]
    fn test_chunker_adds_marker_phrases() {
        let plain = SkillExtractor::new().extract(SAMPLE);
        assert!(!plain.contains(&"rest api development".to_string()));

        let enriched = SkillExtractor::with_chunker(Arc::new(HeuristicChunker)).extract(SAMPLE);
        assert!(enriched.contains(&"rest api development".to_string()));
        for skill in &plain {
            assert!(enriched.contains(skill));
        }
    }

    #[test]
    fn test_chunker_failure_leaves_dictionary_result_intact() {
        let plain = SkillExtractor::new().extract(SAMPLE);
        let degraded = SkillExtractor::with_chunker(Arc::new(FailingChunker)).extract(SAMPLE);
        assert_eq!(plain, degraded);
    }

    #[test]
    fn test_normalize_skill() {
        assert_eq!(normalize_skill("  Python "), "python");
        assert_eq!(normalize_skill("REST API"), "rest api");
    }
}
