use crate::domain::news::Article;
use crate::domain::ports::ArticleSource;
use crate::infrastructure::core::HttpClientFactory;
use crate::infrastructure::news::relative_time::render_relative_time;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest_middleware::ClientWithMiddleware;
use rss::Channel;
use std::io::Cursor;
use tracing::{debug, info};

/// Yahoo Finance per-ticker headline feed.
pub const DEFAULT_FEED_URL: &str =
    "https://feeds.finance.yahoo.com/rss/2.0/headline?s={ticker}&region=US&lang=en-US";

/// Placeholder replaced by the ticker in a feed URL template.
pub const TICKER_PLACEHOLDER: &str = "{ticker}";

/// Fetches a ticker's headline feed and turns each item into an [`Article`].
///
/// RSS items carry an absolute `pubDate`; it is rendered into the relative
/// phrase news pages display so the rest of the pipeline sees one format.
pub struct RssArticleSource {
    url_template: String,
    client: ClientWithMiddleware,
    max_articles: usize,
}

impl RssArticleSource {
    pub fn new(url_template: &str, max_articles: usize) -> Self {
        Self {
            url_template: url_template.to_string(),
            client: HttpClientFactory::create_client(),
            max_articles,
        }
    }

    pub fn feed_url(&self, ticker: &str) -> String {
        self.url_template.replace(TICKER_PLACEHOLDER, ticker)
    }
}

#[async_trait]
impl ArticleSource for RssArticleSource {
    async fn fetch_articles(&self, ticker: &str) -> Result<Vec<Article>> {
        let url = self.feed_url(ticker);
        info!("Fetching RSS headlines for {} from {}", ticker, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch RSS feed {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("RSS feed {} returned status: {}", url, response.status());
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read RSS bytes")?;

        let articles = parse_feed(&bytes, Utc::now(), self.max_articles)?;
        info!("Fetched {} articles for {}", articles.len(), ticker);
        Ok(articles)
    }

    fn name(&self) -> &str {
        "rss"
    }
}

/// Parse an RSS document into at most `max_articles` articles, in feed order.
///
/// Missing titles or links are kept as empty strings so the aggregator can
/// report them as malformed. A missing or unparseable `pubDate` yields an
/// empty relative-time phrase.
pub fn parse_feed(bytes: &[u8], now: DateTime<Utc>, max_articles: usize) -> Result<Vec<Article>> {
    let channel = Channel::read_from(Cursor::new(bytes))
        .map_err(|e| anyhow::anyhow!("Failed to parse RSS feed: {}", e))?;

    let articles = channel
        .items()
        .iter()
        .take(max_articles)
        .map(|item| {
            let relative_time = item
                .pub_date()
                .and_then(|d| DateTime::parse_from_rfc2822(d).ok())
                .map(|d| render_relative_time(d.with_timezone(&Utc), now))
                .unwrap_or_default();

            let article = Article::new(
                item.title().unwrap_or_default().trim(),
                item.description().unwrap_or_default().trim(),
                item.link().unwrap_or_default().trim(),
                relative_time,
            );
            debug!("RSS item: {} [{}]", article.title, article.relative_time);
            article
        })
        .collect();

    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Yahoo! Finance: TSLA News</title>
    <link>https://finance.yahoo.com/</link>
    <description>Latest Financial News for TSLA</description>
    <item>
      <title>Tesla deliveries beat expectations</title>
      <description>Deliveries rose in the quarter.</description>
      <link>https://finance.yahoo.com/news/tesla-deliveries.html</link>
      <pubDate>Tue, 02 Jun 2026 10:00:00 +0000</pubDate>
    </item>
    <item>
      <title>Analysts weigh in on robotaxi plans</title>
      <link>https://finance.yahoo.com/news/robotaxi.html</link>
      <pubDate>Sun, 17 May 2026 12:00:00 +0000</pubDate>
    </item>
    <item>
      <title>Undated wire story</title>
      <link>https://finance.yahoo.com/news/wire.html</link>
    </item>
  </channel>
</rss>"#;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 2, 13, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_feed_items() {
        let articles = parse_feed(FEED.as_bytes(), now(), 100).unwrap();
        assert_eq!(articles.len(), 3);

        assert_eq!(articles[0].title, "Tesla deliveries beat expectations");
        assert_eq!(articles[0].excerpt, "Deliveries rose in the quarter.");
        assert_eq!(articles[0].url, "https://finance.yahoo.com/news/tesla-deliveries.html");
        assert_eq!(articles[0].relative_time, "3 hours ago");

        assert_eq!(articles[1].excerpt, "");
        assert_eq!(articles[1].relative_time, "2 weeks ago");

        assert_eq!(articles[2].relative_time, "");
    }

    #[test]
    fn test_parse_feed_respects_limit() {
        let articles = parse_feed(FEED.as_bytes(), now(), 1).unwrap();
        assert_eq!(articles.len(), 1);
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(parse_feed(b"<html>not a feed</html>", now(), 10).is_err());
    }

    #[test]
    fn test_feed_url_substitutes_ticker() {
        let source = RssArticleSource::new(DEFAULT_FEED_URL, 10);
        assert_eq!(
            source.feed_url("AAPL"),
            "https://feeds.finance.yahoo.com/rss/2.0/headline?s=AAPL&region=US&lang=en-US"
        );
    }
}
