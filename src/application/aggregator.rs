use crate::domain::errors::{ScorerError, SkipReason};
use crate::domain::news::{Article, ScoredArticle};
use crate::domain::ports::SentimentScorer;
use crate::domain::recency::{DecayModel, estimate_age_days};
use crate::domain::sentiment::SentimentClass;
use crate::domain::tally::WeightedTally;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// An input article that contributed nothing to the aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedArticle {
    /// Position in the input sequence.
    pub index: usize,
    pub title: String,
    pub reason: SkipReason,
}

/// Result of one pass over an article sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Scored articles in input order.
    pub articles: Vec<ScoredArticle>,
    pub tally: WeightedTally,
    #[serde(default)]
    pub skipped: Vec<SkippedArticle>,
}

impl Aggregation {
    pub fn into_parts(self) -> (Vec<ScoredArticle>, WeightedTally) {
        (self.articles, self.tally)
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Scores, ages, weights and classifies articles, folding them into a [`WeightedTally`].
///
/// Single linear pass, no shared state: running it twice over the same
/// input with a deterministic scorer gives identical results. An article
/// that is malformed, or that the scorer cannot score, is dropped from both
/// the output sequence and the tally.
pub struct SentimentAggregator<'a> {
    scorer: &'a dyn SentimentScorer,
    decay: DecayModel,
}

impl<'a> SentimentAggregator<'a> {
    pub fn new(scorer: &'a dyn SentimentScorer, decay: DecayModel) -> Self {
        Self { scorer, decay }
    }

    pub fn process(&self, articles: Vec<Article>) -> Aggregation {
        let mut aggregation = Aggregation {
            articles: Vec::with_capacity(articles.len()),
            ..Aggregation::default()
        };

        for (index, article) in articles.into_iter().enumerate() {
            match self.score_article(&article) {
                Ok((compound, class, age_days, weight)) => {
                    debug!(
                        "Article #{} '{}': {} (compound {:.4}, {} days old, weight {:.4})",
                        index, article.title, class, compound, age_days, weight
                    );
                    aggregation.tally.add(class, weight);
                    aggregation.articles.push(ScoredArticle::from_article(
                        article, compound, class, age_days, weight,
                    ));
                }
                Err(reason) => {
                    warn!("Skipping article #{} '{}': {}", index, article.title, reason);
                    aggregation.skipped.push(SkippedArticle {
                        index,
                        title: article.title,
                        reason,
                    });
                }
            }
        }

        aggregation
    }

    fn score_article(
        &self,
        article: &Article,
    ) -> Result<(f64, SentimentClass, u32, f64), SkipReason> {
        article.validate()?;

        let compound = self.scorer.score(&article.scoring_text())?;
        if !(-1.0..=1.0).contains(&compound) {
            // NaN also fails the range check
            return Err(ScorerError::OutOfRange { score: compound }.into());
        }

        let class = SentimentClass::from_compound(compound);
        let age_days = estimate_age_days(&article.relative_time);
        let weight = self.decay.weight(age_days);

        Ok((compound, class, age_days, weight))
    }
}
