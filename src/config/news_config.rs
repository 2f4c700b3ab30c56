//! News source configuration parsing from environment variables.

use super::{EnvLookup, parse_or};
use crate::infrastructure::news::rss::DEFAULT_FEED_URL;
use anyhow::Result;
use std::path::PathBuf;
use std::str::FromStr;

/// Where articles come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Rss,
    Snapshot,
    Mock,
}

impl FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rss" => Ok(SourceKind::Rss),
            "snapshot" => Ok(SourceKind::Snapshot),
            "mock" => Ok(SourceKind::Mock),
            _ => anyhow::bail!(
                "Invalid NEWS_SOURCE: {}. Must be 'rss', 'snapshot' or 'mock'",
                s
            ),
        }
    }
}

/// News environment configuration
#[derive(Debug, Clone)]
pub struct NewsEnvConfig {
    pub source: SourceKind,
    /// Feed URL template; `{ticker}` is replaced per run.
    pub feed_url: String,
    pub max_articles: usize,
    pub snapshot_enabled: bool,
    pub snapshot_dir: PathBuf,
    /// File replayed when `source` is `Snapshot`.
    pub snapshot_path: Option<PathBuf>,
}

impl Default for NewsEnvConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Rss,
            feed_url: DEFAULT_FEED_URL.to_string(),
            max_articles: 100,
            snapshot_enabled: true,
            snapshot_dir: PathBuf::from("."),
            snapshot_path: None,
        }
    }
}

impl NewsEnvConfig {
    pub fn from_vars(vars: EnvLookup<'_>) -> Result<Self> {
        let defaults = Self::default();

        let source = match vars("NEWS_SOURCE") {
            Some(s) => SourceKind::from_str(&s)?,
            None => defaults.source,
        };

        Ok(Self {
            source,
            feed_url: vars("NEWS_FEED_URL").unwrap_or(defaults.feed_url),
            max_articles: parse_or(vars, "MAX_ARTICLES", defaults.max_articles)?,
            snapshot_enabled: parse_or(vars, "SNAPSHOT_ENABLED", defaults.snapshot_enabled)?,
            snapshot_dir: vars("SNAPSHOT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.snapshot_dir),
            snapshot_path: vars("SNAPSHOT_PATH").map(PathBuf::from),
        })
    }
}
