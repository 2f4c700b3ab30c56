use crate::config::{Config, SourceKind};
use crate::domain::ports::{ArticleSource, SentimentScorer};
use crate::infrastructure::news::{
    MockArticleSource, RssArticleSource, SnapshotArticleSource, VaderScorer,
};
use anyhow::{Context, Result};
use std::sync::Arc;

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn create_source(config: &Config) -> Result<Arc<dyn ArticleSource>> {
        let source: Arc<dyn ArticleSource> = match config.news_source {
            SourceKind::Rss => Arc::new(RssArticleSource::new(
                &config.news_feed_url,
                config.max_articles,
            )),
            SourceKind::Snapshot => {
                let path = config
                    .snapshot_path
                    .clone()
                    .context("SNAPSHOT_PATH must be set when NEWS_SOURCE=snapshot")?;
                Arc::new(SnapshotArticleSource::new(path))
            }
            SourceKind::Mock => Arc::new(MockArticleSource::sample()),
        };
        Ok(source)
    }

    pub fn create_scorer(config: &Config) -> Arc<dyn SentimentScorer> {
        Arc::new(VaderScorer::new().with_financial_boost(config.financial_boost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_source_requires_path() {
        let mut config = Config::default();
        config.news_source = SourceKind::Snapshot;
        config.snapshot_path = None;
        assert!(ServiceFactory::create_source(&config).is_err());
    }

    #[test]
    fn test_creates_named_sources() {
        let mut config = Config::default();
        assert_eq!(ServiceFactory::create_source(&config).unwrap().name(), "rss");

        config.news_source = SourceKind::Mock;
        assert_eq!(ServiceFactory::create_source(&config).unwrap().name(), "mock");
    }
}
