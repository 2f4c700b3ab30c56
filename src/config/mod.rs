//! Configuration module for newsweight.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: News source, Analysis, and Output.

mod analysis_config;
mod news_config;
mod output_config;

pub use analysis_config::AnalysisEnvConfig;
pub use news_config::{NewsEnvConfig, SourceKind};
pub use output_config::OutputEnvConfig;

use crate::domain::recency::DecayModel;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Reads one configuration variable; `env::var` in production, a map in tests.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub const DEFAULT_TICKER: &str = "TSLA";

/// Main application configuration.
///
/// Aggregates the sub-configs into flat fields for the rest of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // Core
    pub ticker: String,

    // News (from NewsEnvConfig)
    pub news_source: SourceKind,
    pub news_feed_url: String,
    pub max_articles: usize,
    pub snapshot_enabled: bool,
    pub snapshot_dir: PathBuf,
    pub snapshot_path: Option<PathBuf>,

    // Analysis (from AnalysisEnvConfig)
    pub decay_lambda: f64,
    pub financial_boost: bool,

    // Output (from OutputEnvConfig)
    pub output_dir: PathBuf,
    pub csv_export_enabled: bool,
    pub symbols_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::compose(
            DEFAULT_TICKER.to_string(),
            NewsEnvConfig::default(),
            AnalysisEnvConfig::default(),
            OutputEnvConfig::default(),
        )
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&|key: &str| env::var(key).ok())
    }

    pub fn from_vars(vars: EnvLookup<'_>) -> Result<Self> {
        let ticker = vars("TICKER").unwrap_or_else(|| DEFAULT_TICKER.to_string());

        let news = NewsEnvConfig::from_vars(vars).context("Failed to load news config")?;
        let analysis =
            AnalysisEnvConfig::from_vars(vars).context("Failed to load analysis config")?;
        let output = OutputEnvConfig::from_vars(vars).context("Failed to load output config")?;

        Ok(Self::compose(ticker, news, analysis, output))
    }

    fn compose(
        ticker: String,
        news: NewsEnvConfig,
        analysis: AnalysisEnvConfig,
        output: OutputEnvConfig,
    ) -> Self {
        Self {
            ticker,

            // News
            news_source: news.source,
            news_feed_url: news.feed_url,
            max_articles: news.max_articles,
            snapshot_enabled: news.snapshot_enabled,
            snapshot_dir: news.snapshot_dir,
            snapshot_path: news.snapshot_path,

            // Analysis
            decay_lambda: analysis.decay_lambda,
            financial_boost: analysis.financial_boost,

            // Output
            output_dir: output.output_dir,
            csv_export_enabled: output.csv_export_enabled,
            symbols_file: output.symbols_file,
        }
    }

    /// Create a DecayModel domain value object from this Config
    pub fn decay_model(&self) -> Result<DecayModel> {
        DecayModel::new(self.decay_lambda)
            .map_err(|e| anyhow::anyhow!("Invalid decay config: {}", e))
    }
}

/// Parse `key` if set, otherwise return `default`. A set but malformed value is an error.
fn parse_or<T>(vars: EnvLookup<'_>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match vars(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {}", key)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(&|key: &str| map.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = load(&[]).expect("Should parse with defaults");
        assert_eq!(config.ticker, "TSLA");
        assert_eq!(config.news_source, SourceKind::Rss);
        assert_eq!(config.max_articles, 100);
        assert_eq!(config.decay_lambda, 0.05);
        assert!(config.snapshot_enabled);
        assert!(config.csv_export_enabled);
        assert!(!config.financial_boost);
        assert!(config.news_feed_url.contains("{ticker}"));
        assert!(config.symbols_file.is_none());
    }

    #[test]
    fn test_config_overrides() {
        let config = load(&[
            ("TICKER", "AAPL"),
            ("NEWS_SOURCE", "mock"),
            ("MAX_ARTICLES", "25"),
            ("DECAY_LAMBDA", "0.1"),
            ("FINANCIAL_BOOST", "true"),
            ("CSV_EXPORT_ENABLED", "false"),
            ("OUTPUT_DIR", "/tmp/out"),
            ("SYMBOLS_FILE", "allsymbols.txt"),
        ])
        .unwrap();

        assert_eq!(config.ticker, "AAPL");
        assert_eq!(config.news_source, SourceKind::Mock);
        assert_eq!(config.max_articles, 25);
        assert_eq!(config.decay_lambda, 0.1);
        assert!(config.financial_boost);
        assert!(!config.csv_export_enabled);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.symbols_file, Some(PathBuf::from("allsymbols.txt")));
    }

    #[test]
    fn test_malformed_numbers_are_errors() {
        let err = load(&[("MAX_ARTICLES", "lots")]).unwrap_err();
        assert!(format!("{:#}", err).contains("MAX_ARTICLES"));
        assert!(load(&[("DECAY_LAMBDA", "fast")]).is_err());
        assert!(load(&[("NEWS_SOURCE", "browser")]).is_err());
    }

    #[test]
    fn test_malformed_booleans_are_errors() {
        for key in ["SNAPSHOT_ENABLED", "FINANCIAL_BOOST", "CSV_EXPORT_ENABLED"] {
            let err = load(&[(key, "yes")]).unwrap_err();
            assert!(format!("{:#}", err).contains(key), "{}", key);
        }
        let config = load(&[("SNAPSHOT_ENABLED", " false ")]).unwrap();
        assert!(!config.snapshot_enabled);
    }

    #[test]
    fn test_decay_model_validation() {
        let mut config = Config::default();
        assert!(config.decay_model().is_ok());

        config.decay_lambda = 0.0;
        assert!(config.decay_model().is_err());
    }
}
