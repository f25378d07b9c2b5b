use thiserror::Error;

/// Application-level error type.
///
/// The extraction and scoring core never returns these to callers. They surface at the edges
/// (corpus loading, configuration) and inside the soft-dependency seams, where the caller
/// degrades to a deterministic fallback instead of propagating.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corpus decode error: {0}")]
    Corpus(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Similarity backend error: {0}")]
    Similarity(String),

    #[error("Phrase chunker error: {0}")]
    Chunker(String),
}

impl AppError {
    /// Short machine-readable code, used as a structured logging field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Io(_) => "IO_ERROR",
            AppError::Corpus(_) => "CORPUS_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Similarity(_) => "SIMILARITY_ERROR",
            AppError::Chunker(_) => "CHUNKER_ERROR",
        }
    }
}
