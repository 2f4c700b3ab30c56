use crate::domain::errors::ArticleError;
use crate::domain::sentiment::SentimentClass;
use serde::{Deserialize, Serialize};
use url::Url;

/// Separator placed between title and excerpt when building the scoring text.
pub const SCORING_SEPARATOR: &str = ". ";

/// A raw headline as produced by an article source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub url: String,
    /// Free-text recency, e.g. "3 hours ago" or "last week".
    #[serde(default)]
    pub relative_time: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        url: impl Into<String>,
        relative_time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            url: url.into(),
            relative_time: relative_time.into(),
        }
    }

    /// Checks the fields every article must carry: a non-blank title and an absolute URL.
    pub fn validate(&self) -> Result<(), ArticleError> {
        if self.title.trim().is_empty() {
            return Err(ArticleError::EmptyTitle);
        }

        Url::parse(&self.url).map_err(|e| ArticleError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Text handed to the sentiment scorer: title, separator, excerpt.
    pub fn scoring_text(&self) -> String {
        format!("{}{}{}", self.title, SCORING_SEPARATOR, self.excerpt)
    }
}

/// An article after scoring, aging and weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub relative_time: String,
    pub compound_score: f64,
    pub sentiment_class: SentimentClass,
    pub age_days: u32,
    /// Decay weight rounded to 4 decimals for display.
    pub weight: f64,
}

impl ScoredArticle {
    pub fn from_article(
        article: Article,
        compound_score: f64,
        sentiment_class: SentimentClass,
        age_days: u32,
        weight: f64,
    ) -> Self {
        Self {
            title: article.title,
            excerpt: article.excerpt,
            url: article.url,
            relative_time: article.relative_time,
            compound_score,
            sentiment_class,
            age_days,
            weight: round_to(weight, 4),
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_text_with_empty_excerpt() {
        let article = Article::new("Stock soars", "", "https://example.com/a", "2 days ago");
        assert_eq!(article.scoring_text(), "Stock soars. ");
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let article = Article::new("   ", "body", "https://example.com/a", "");
        assert_eq!(article.validate(), Err(ArticleError::EmptyTitle));
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        let article = Article::new("Title", "", "/news/story.html", "");
        assert!(matches!(
            article.validate(),
            Err(ArticleError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_weight_is_rounded_for_display() {
        let article = Article::new("Title", "", "https://example.com/a", "2 days ago");
        let scored =
            ScoredArticle::from_article(article, 0.6, SentimentClass::Positive, 2, 0.904837418);
        assert_eq!(scored.weight, 0.9048);
    }
}
