use crate::domain::news::Article;
use crate::domain::ports::ArticleSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// In-memory article source returning a fixed list for any ticker.
pub struct MockArticleSource {
    articles: Vec<Article>,
}

impl MockArticleSource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// A small mixed set of headlines for demos and offline runs.
    pub fn sample() -> Self {
        Self::new(vec![
            Article::new(
                "Automaker posts excellent quarter as deliveries hit record",
                "Investors cheer strong growth in vehicle sales.",
                "https://finance.example.com/news/record-deliveries",
                "3 hours ago",
            ),
            Article::new(
                "Regulators open investigation into driver assistance crashes",
                "The probe covers several fatal accidents.",
                "https://finance.example.com/news/probe",
                "2 days ago",
            ),
            Article::new(
                "Company schedules annual shareholder meeting",
                "",
                "https://finance.example.com/news/agm",
                "last week",
            ),
            Article::new(
                "Analysts love new battery plant plans",
                "Several brokers raise targets.",
                "https://finance.example.com/news/battery",
                "2 months ago",
            ),
        ])
    }
}

impl Default for MockArticleSource {
    fn default() -> Self {
        Self::sample()
    }
}

#[async_trait]
impl ArticleSource for MockArticleSource {
    async fn fetch_articles(&self, ticker: &str) -> Result<Vec<Article>> {
        info!("Serving {} mock articles for {}", self.articles.len(), ticker);
        Ok(self.articles.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
