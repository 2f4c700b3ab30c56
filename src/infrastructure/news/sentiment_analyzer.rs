//! Local NLP-based sentiment scoring using VADER
//!
//! Scores headline text with the VADER (Valence Aware Dictionary and
//! sEntiment Reasoner) compound score. Optionally nudges the score with
//! equity-market keywords that VADER's general lexicon under-weights.
//!
//! # Example
//! ```rust,ignore
//! use newsweight::infrastructure::news::sentiment_analyzer::VaderScorer;
//! use newsweight::domain::ports::SentimentScorer;
//!
//! let scorer = VaderScorer::new();
//! let score = scorer.score("Investors cheer great results. ")?;
//! assert!(score > 0.05); // Positive
//! ```

use crate::domain::errors::ScorerError;
use crate::domain::ports::SentimentScorer;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Equity-news phrases and the amount they shift the score.
const BULLISH_KEYWORDS: &[(&str, f64)] = &[
    ("beats estimates", 0.4),
    ("beat estimates", 0.4),
    ("record earnings", 0.4),
    ("record revenue", 0.4),
    ("raises guidance", 0.4),
    ("upgrade", 0.3),
    ("upgraded", 0.3),
    ("outperform", 0.3),
    ("buyback", 0.2),
    ("rally", 0.3),
    ("rallies", 0.3),
    ("surge", 0.3),
    ("surges", 0.3),
    ("all-time high", 0.4),
    ("dividend increase", 0.3),
];

const BEARISH_KEYWORDS: &[(&str, f64)] = &[
    ("misses estimates", -0.4),
    ("missed estimates", -0.4),
    ("cuts guidance", -0.4),
    ("lowers guidance", -0.4),
    ("downgrade", -0.3),
    ("downgraded", -0.3),
    ("underperform", -0.3),
    ("recall", -0.3),
    ("lawsuit", -0.3),
    ("investigation", -0.3),
    ("layoffs", -0.3),
    ("plunge", -0.4),
    ("plunges", -0.4),
    ("sell-off", -0.3),
    ("bankruptcy", -0.5),
];

/// [`SentimentScorer`] backed by VADER.
///
/// With the financial boost disabled the score is VADER's compound score
/// unchanged. With it enabled, keyword boosts are added at half strength and
/// the result is clamped back into [-1, 1].
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
    financial_boost: bool,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
            financial_boost: false,
        }
    }

    pub fn with_financial_boost(mut self, enabled: bool) -> Self {
        self.financial_boost = enabled;
        self
    }

    fn keyword_boost(text: &str) -> f64 {
        let text_lower = text.to_lowercase();
        BULLISH_KEYWORDS
            .iter()
            .chain(BEARISH_KEYWORDS)
            .filter(|(keyword, _)| text_lower.contains(keyword))
            .map(|(_, boost)| boost)
            .sum()
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<f64, ScorerError> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }

        let scores = self.analyzer.polarity_scores(text);
        let compound = scores
            .get("compound")
            .copied()
            .ok_or_else(|| ScorerError::Failed {
                reason: "VADER returned no compound score".to_string(),
            })?;

        if !self.financial_boost {
            return Ok(compound);
        }

        Ok((compound + Self::keyword_boost(text) * 0.5).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_headlines() {
        let scorer = VaderScorer::new();

        let headlines = [
            "Excellent quarter for the company. ",
            "Investors cheer great results as profits grow. ",
            "Analysts love the new product, shares win big. ",
        ];

        for headline in headlines {
            let score = scorer.score(headline).unwrap();
            assert!(score >= 0.05, "Expected positive score for '{}', got {}", headline, score);
        }
    }

    #[test]
    fn test_negative_headlines() {
        let scorer = VaderScorer::new();

        let headlines = [
            "Company faces terrible losses and fraud charges. ",
            "Shares crash as CEO resigns amid scandal. ",
            "Investors fear disaster after failed launch. ",
        ];

        for headline in headlines {
            let score = scorer.score(headline).unwrap();
            assert!(score <= -0.05, "Expected negative score for '{}', got {}", headline, score);
        }
    }

    #[test]
    fn test_scores_stay_in_range() {
        let scorer = VaderScorer::new().with_financial_boost(true);
        let score = scorer
            .score("Great amazing record earnings, beats estimates, upgrade, rally, surge! ")
            .unwrap();
        assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn test_empty_text() {
        let scorer = VaderScorer::new();
        assert_eq!(scorer.score("").unwrap(), 0.0);
        assert_eq!(scorer.score("   ").unwrap(), 0.0);
    }

    #[test]
    fn test_financial_boost_shifts_score() {
        let plain = VaderScorer::new();
        let boosted = VaderScorer::new().with_financial_boost(true);
        let text = "Automaker downgraded after recall and layoffs. ";

        assert!(boosted.score(text).unwrap() < plain.score(text).unwrap());
    }
}
