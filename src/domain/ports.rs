use crate::domain::errors::ScorerError;
use crate::domain::news::Article;
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can supply the current headlines for a ticker.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch a finite, stably ordered list of articles. An empty list is valid.
    async fn fetch_articles(&self, ticker: &str) -> Result<Vec<Article>>;

    fn name(&self) -> &str;
}

/// Maps text to a compound polarity score in [-1, 1].
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<f64, ScorerError>;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> Result<f64, ScorerError> + Send + Sync,
{
    fn score(&self, text: &str) -> Result<f64, ScorerError> {
        self(text)
    }
}
