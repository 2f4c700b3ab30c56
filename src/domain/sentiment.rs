use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores at or below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentClass {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Negative => write!(f, "Negative"),
        }
    }
}

impl SentimentClass {
    /// Display and chart order.
    pub const ALL: [SentimentClass; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Classify a compound polarity score.
    ///
    /// Boundaries are inclusive on the polar side: `0.05` is Positive,
    /// `-0.05` is Negative, anything strictly between is Neutral.
    pub fn from_compound(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}
