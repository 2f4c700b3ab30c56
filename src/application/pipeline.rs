use crate::application::aggregator::{Aggregation, SentimentAggregator};
use crate::domain::errors::ConfigError;
use crate::domain::ports::{ArticleSource, SentimentScorer};
use crate::domain::recency::DecayModel;
use crate::infrastructure::news::SnapshotStore;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Everything one analysis run produced, ready for display or export.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub ticker: String,
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub decay_lambda: f64,
    #[serde(flatten)]
    pub aggregation: Aggregation,
}

/// Drives one run: fetch -> (snapshot) -> score/age/weight/classify -> report.
pub struct SentimentPipeline {
    source: Arc<dyn ArticleSource>,
    scorer: Arc<dyn SentimentScorer>,
    decay: DecayModel,
    snapshot: Option<SnapshotStore>,
}

impl SentimentPipeline {
    pub fn new(
        source: Arc<dyn ArticleSource>,
        scorer: Arc<dyn SentimentScorer>,
        decay: DecayModel,
    ) -> Self {
        Self {
            source,
            scorer,
            decay,
            snapshot: None,
        }
    }

    /// Save fetched articles under `store` before analysing them.
    pub fn with_snapshot(mut self, store: SnapshotStore) -> Self {
        self.snapshot = Some(store);
        self
    }

    pub async fn run(&self, ticker: &str) -> Result<AnalysisReport> {
        let ticker = normalize_ticker(ticker)?;
        let generated_at = Utc::now();
        info!(
            "Analyzing news sentiment for {} (source: {}, lambda: {})",
            ticker,
            self.source.name(),
            self.decay.lambda()
        );

        let articles = self
            .source
            .fetch_articles(&ticker)
            .await
            .with_context(|| format!("Failed to fetch articles for {}", ticker))?;

        if let Some(store) = &self.snapshot {
            // Snapshot failures are logged, never fatal
            if let Err(e) = store
                .save(&ticker, generated_at.date_naive(), &articles)
                .await
            {
                warn!("Failed to save article snapshot: {:#}", e);
            }
        }

        if articles.is_empty() {
            info!("No articles found for {}", ticker);
        }

        let aggregation =
            SentimentAggregator::new(self.scorer.as_ref(), self.decay).process(articles);

        info!(
            "Analysis complete for {}: {} articles analyzed, {} skipped",
            ticker,
            aggregation.articles.len(),
            aggregation.skipped.len()
        );

        Ok(AnalysisReport {
            ticker,
            source: self.source.name().to_string(),
            generated_at,
            decay_lambda: self.decay.lambda(),
            aggregation,
        })
    }
}

/// Trimmed, upper-cased ticker; empty input is rejected.
pub fn normalize_ticker(ticker: &str) -> Result<String, ConfigError> {
    let ticker = ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(ConfigError::EmptyTicker);
    }
    Ok(ticker)
}

/// Reject tickers missing from a non-empty symbol list.
pub fn ensure_known_ticker(ticker: &str, symbols: &[String]) -> Result<(), ConfigError> {
    if symbols.is_empty() || symbols.iter().any(|s| s == ticker) {
        Ok(())
    } else {
        Err(ConfigError::UnknownTicker {
            ticker: ticker.to_string(),
        })
    }
}
