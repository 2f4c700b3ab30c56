use crate::domain::news::ScoredArticle;
use crate::domain::sentiment::SentimentClass;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

const HEADERS: [&str; 8] = [
    "Title",
    "Quote",
    "URL",
    "Source/Time",
    "Sentiment",
    "Compound",
    "Days Old",
    "Weight",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    title: &'a str,
    quote: &'a str,
    url: &'a str,
    source_time: &'a str,
    sentiment: SentimentClass,
    compound: f64,
    days_old: u32,
    weight: f64,
}

impl<'a> From<&'a ScoredArticle> for CsvRow<'a> {
    fn from(article: &'a ScoredArticle) -> Self {
        Self {
            title: &article.title,
            quote: &article.excerpt,
            url: &article.url,
            source_time: &article.relative_time,
            sentiment: article.sentiment_class,
            compound: article.compound_score,
            days_old: article.age_days,
            weight: article.weight,
        }
    }
}

/// Writes scored articles as one CSV row each, header always present.
pub struct CsvExporter;

impl CsvExporter {
    pub fn file_name(ticker: &str) -> String {
        format!("{}_sentiment.csv", ticker)
    }

    pub fn write<W: Write>(writer: W, articles: &[ScoredArticle]) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(HEADERS)
            .context("Failed to write CSV header")?;
        for article in articles {
            wtr.serialize(CsvRow::from(article))
                .with_context(|| format!("Failed to serialize row for '{}'", article.title))?;
        }
        wtr.flush().context("Failed to flush CSV writer")?;
        Ok(())
    }

    /// Write `{ticker}_sentiment.csv` into `dir`, returning its path.
    pub fn export_to_dir(dir: &Path, ticker: &str, articles: &[ScoredArticle]) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output dir {}", dir.display()))?;

        let path = dir.join(Self::file_name(ticker));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Self::write(file, articles)?;

        info!("Exported {} rows to {}", articles.len(), path.display());
        Ok(path)
    }
}
