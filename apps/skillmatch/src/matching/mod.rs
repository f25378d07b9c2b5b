// Match scoring: skill list × job corpus → ranked results with gap analysis and tips.
// Everything here is synchronous and pure apart from the configured similarity backend.

pub mod matcher;
pub mod scoring;
pub mod similarity;
pub mod tips;

pub use matcher::{JobMatcher, MatchResult};
pub use scoring::{MatchScore, MatchWeights};
pub use similarity::{SimilarityBackend, SimilarityScorer};
pub use tips::improvement_tips;
