// Skill extraction: resume text → sorted, deduplicated skill labels.
// Dictionary matching first, then the explicit skills section, then optional noun phrases.

pub mod extractor;
pub mod phrases;
pub mod section;
pub mod vocabulary;

pub use extractor::{normalize_skill, SkillExtractor};
pub use phrases::{HeuristicChunker, PhraseChunker};
