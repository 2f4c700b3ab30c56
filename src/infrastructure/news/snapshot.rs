//! JSON snapshots of fetched articles.
//!
//! Every run can keep the raw articles it fetched as
//! `{TICKER}{DDMMYYYY}.json` so a later run can replay exactly the same
//! input through [`SnapshotArticleSource`].

use crate::domain::news::Article;
use crate::domain::ports::ArticleSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// On-disk shape of one article.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotRecord {
    title: String,
    #[serde(default)]
    quote: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    source_time: String,
}

impl From<&Article> for SnapshotRecord {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            quote: article.excerpt.clone(),
            url: article.url.clone(),
            source_time: article.relative_time.clone(),
        }
    }
}

impl From<SnapshotRecord> for Article {
    fn from(record: SnapshotRecord) -> Self {
        Article::new(record.title, record.quote, record.url, record.source_time)
    }
}

pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn file_name(ticker: &str, date: NaiveDate) -> String {
        format!("{}{}.json", ticker.to_uppercase(), date.format("%d%m%Y"))
    }

    /// Write `articles` as pretty-printed JSON, replacing any snapshot of the same day.
    pub async fn save(
        &self,
        ticker: &str,
        date: NaiveDate,
        articles: &[Article],
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create snapshot dir {}", self.dir.display()))?;

        let path = self.dir.join(Self::file_name(ticker, date));
        let records: Vec<SnapshotRecord> = articles.iter().map(SnapshotRecord::from).collect();
        let json = serde_json::to_string_pretty(&records).context("Failed to serialize snapshot")?;

        fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;

        info!("Saved {} articles to {}", articles.len(), path.display());
        Ok(path)
    }
}

pub async fn load_snapshot(path: &Path) -> Result<Vec<Article>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    parse_snapshot(&content).with_context(|| format!("Invalid snapshot {}", path.display()))
}

fn parse_snapshot(content: &str) -> Result<Vec<Article>> {
    let records: Vec<SnapshotRecord> = serde_json::from_str(content)?;
    Ok(records.into_iter().map(Article::from).collect())
}

/// Replays a saved snapshot; the ticker argument is only used for logging.
pub struct SnapshotArticleSource {
    path: PathBuf,
}

impl SnapshotArticleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ArticleSource for SnapshotArticleSource {
    async fn fetch_articles(&self, ticker: &str) -> Result<Vec<Article>> {
        let articles = load_snapshot(&self.path).await?;

        info!(
            "Loaded {} articles for {} from {}",
            articles.len(),
            ticker,
            self.path.display()
        );
        Ok(articles)
    }

    fn name(&self) -> &str {
        "snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("newsweight-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_file_name_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(SnapshotStore::file_name("tsla", date), "TSLA07032026.json");
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = scratch_dir("save-load");
        let store = SnapshotStore::new(&dir);
        let articles = vec![
            Article::new("Headline one", "Quote", "https://example.com/1", "2 days ago"),
            Article::new("Headline two", "", "https://example.com/2", "last week"),
        ];

        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let path = store.save("TSLA", date, &articles).await.unwrap();
        assert!(path.ends_with("TSLA19102026.json"));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"source_time\": \"2 days ago\""));
        assert!(raw.contains("\"quote\": \"Quote\""));

        assert_eq!(load_snapshot(&path).await.unwrap(), articles);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let articles =
            parse_snapshot(r#"[{"title": "Only a title", "url": "https://example.com/x"}]"#)
                .unwrap();
        assert_eq!(articles[0].excerpt, "");
        assert_eq!(articles[0].relative_time, "");
    }

    #[tokio::test]
    async fn test_snapshot_source_replays_file() {
        let dir = scratch_dir("source");
        let store = SnapshotStore::new(&dir);
        let articles = vec![Article::new("Replayed", "", "https://example.com/r", "1 year ago")];
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let path = store.save("AAPL", date, &articles).await.unwrap();

        let source = SnapshotArticleSource::new(&path);
        assert_eq!(source.fetch_articles("AAPL").await.unwrap(), articles);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_snapshot_source_missing_file() {
        let source = SnapshotArticleSource::new(scratch_dir("missing").join("nope.json"));
        assert!(source.fetch_articles("AAPL").await.is_err());
    }
}
