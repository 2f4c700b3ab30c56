use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when an article coming from a source is unusable
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ArticleError {
    #[error("Article has an empty title")]
    EmptyTitle,

    #[error("Invalid article URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Errors raised by a sentiment scorer
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ScorerError {
    #[error("Sentiment scorer failed: {reason}")]
    Failed { reason: String },

    #[error("Compound score {score} is outside [-1, 1]")]
    OutOfRange { score: f64 },
}

/// Why a single article was dropped from an aggregation
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SkipReason {
    #[error("Malformed article: {0}")]
    Malformed(#[from] ArticleError),

    #[error("Scoring failed: {0}")]
    Scorer(#[from] ScorerError),
}

/// Errors related to analysis parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Decay lambda must be finite and > 0, got {lambda}")]
    InvalidDecayLambda { lambda: f64 },

    #[error("Ticker must not be empty")]
    EmptyTicker,

    #[error("Ticker {ticker} is not in the symbol list")]
    UnknownTicker { ticker: String },
}
