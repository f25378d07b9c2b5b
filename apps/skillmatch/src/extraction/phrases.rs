//! Optional noun-phrase enrichment.
//!
//! A `PhraseChunker` proposes candidate noun phrases; the extractor keeps the ones that look like
//! technology names. Chunking is best-effort: any error is logged and the phrase pass is skipped.

use std::collections::BTreeSet;

use tracing::warn;

use crate::errors::AppError;
use crate::extraction::vocabulary::PHRASE_MARKERS;

/// Inputs longer than this are refused by the built-in chunker.
pub const MAX_CHUNK_INPUT: usize = 1_000_000;

/// Proposes noun phrases from free text. Implementations must be cheap to share.
pub trait PhraseChunker: Send + Sync {
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>, AppError>;

    /// Short backend label for logs.
    fn name(&self) -> &'static str;
}

/// Words that never belong inside a noun phrase. A run of other words between two of these
/// (or between punctuation) is treated as one phrase.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "of", "in", "on", "at", "to", "for", "from",
    "with", "without", "by", "as", "into", "onto", "over", "under", "via", "per", "using",
    "i", "me", "my", "we", "our", "you", "your", "he", "she", "it", "its", "they", "their",
    "this", "that", "these", "those", "who", "which", "what", "where", "when",
    "is", "am", "are", "was", "were", "be", "been", "being", "has", "have", "had", "do",
    "does", "did", "will", "would", "can", "could", "should", "may", "might", "must",
    "not", "no", "also", "very", "more", "most",
];

/// Clause boundaries. `.` and `/` are absent on purpose so `node.js` and `ci/cd` survive.
const CLAUSE_BREAKS: &[char] = &[',', ';', ':', '!', '?', '(', ')', '[', ']', '\n', '•', '|'];

/// Deterministic chunker: clause split, then function-word split.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicChunker;

impl PhraseChunker for HeuristicChunker {
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>, AppError> {
        if text.len() > MAX_CHUNK_INPUT {
            return Err(AppError::Chunker(format!(
                "input of {} bytes exceeds chunker limit of {MAX_CHUNK_INPUT}",
                text.len()
            )));
        }

        let mut phrases = Vec::new();
        for clause in text.split(CLAUSE_BREAKS) {
            let mut run: Vec<String> = Vec::new();
            for raw in clause.split_whitespace() {
                let word = clean_word(raw);
                if word.is_empty() {
                    continue;
                }
                let sentence_end = raw.ends_with('.') && !word.ends_with('.');
                if FUNCTION_WORDS.contains(&word.as_str()) {
                    flush(&mut run, &mut phrases);
                    continue;
                }
                run.push(word);
                if sentence_end {
                    flush(&mut run, &mut phrases);
                }
            }
            flush(&mut run, &mut phrases);
        }

        Ok(phrases)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Lowercases and strips wrapping punctuation, keeping symbols that occur inside tech names.
fn clean_word(raw: &str) -> String {
    raw.trim_matches(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#')))
        .to_lowercase()
}

fn flush(run: &mut Vec<String>, phrases: &mut Vec<String>) {
    if !run.is_empty() {
        phrases.push(run.join(" "));
        run.clear();
    }
}

/// Runs the chunker and keeps phrases of 3..=29 characters that contain a marker substring.
/// Chunker failures are swallowed.
pub fn marker_phrases(chunker: &dyn PhraseChunker, text: &str) -> BTreeSet<String> {
    let phrases = match chunker.noun_phrases(text) {
        Ok(phrases) => phrases,
        Err(e) => {
            warn!(
                chunker = chunker.name(),
                code = e.code(),
                "phrase chunking failed, continuing without it: {e}"
            );
            return BTreeSet::new();
        }
    };

    phrases
        .into_iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| {
            let len = p.chars().count();
            len > 2 && len < 30
        })
        .filter(|p| PHRASE_MARKERS.iter().any(|m| p.contains(m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingChunker;

    impl PhraseChunker for FailingChunker {
        fn noun_phrases(&self, _text: &str) -> Result<Vec<String>, AppError> {
            Err(AppError::Chunker("model not loaded".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct FixedChunker(Vec<&'static str>);

    impl PhraseChunker for FixedChunker {
        fn noun_phrases(&self, _text: &str) -> Result<Vec<String>, AppError> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_heuristic_splits_on_function_words_and_punctuation() {
        let phrases = HeuristicChunker
            .noun_phrases("Experienced in Python, Django and REST API development.")
            .unwrap();
        assert_eq!(
            phrases,
            vec!["experienced", "python", "django", "rest api development"]
        );
    }

    #[test]
    fn test_heuristic_keeps_dotted_names() {
        let phrases = HeuristicChunker
            .noun_phrases("Shipped a Node.js platform. Then left")
            .unwrap();
        assert_eq!(phrases, vec!["shipped", "node.js platform", "then left"]);
    }

    #[test]
    fn test_heuristic_rejects_oversized_input() {
        let text = "a".repeat(MAX_CHUNK_INPUT + 1);
        assert!(matches!(
            HeuristicChunker.noun_phrases(&text),
            Err(AppError::Chunker(_))
        ));
    }

    #[test]
    fn test_marker_phrases_filters_by_marker_and_length() {
        let chunker = FixedChunker(vec![
            "payments api",
            "internal tooling platform",
            "a very long phrase about some framework thing",
            "ap",
            "kubernetes",
            "  Testing Library  ",
        ]);
        let kept = marker_phrases(&chunker, "ignored");
        let kept: Vec<_> = kept.into_iter().collect();
        assert_eq!(
            kept,
            vec!["internal tooling platform", "payments api", "testing library"]
        );
    }

    #[test]
    fn test_marker_phrases_swallows_failures() {
        assert!(marker_phrases(&FailingChunker, "REST API platform").is_empty());
    }
}
