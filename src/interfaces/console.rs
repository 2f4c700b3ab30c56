use crate::domain::news::ScoredArticle;
use crate::domain::tally::WeightedTally;
use std::fmt::Write;

const TITLE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 40;

/// Fixed-width table of scored articles, one row per article.
pub fn render_article_table(articles: &[ScoredArticle]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<9} {:>8} {:>8} {:>7}  {}",
        "Sentiment", "Compound", "Days Old", "Weight", "Title"
    );
    let _ = writeln!(out, "{}", "-".repeat(38 + TITLE_WIDTH));

    for article in articles {
        let _ = writeln!(
            out,
            "{:<9} {:>8.4} {:>8} {:>7.4}  {}",
            article.sentiment_class.to_string(),
            article.compound_score,
            article.age_days,
            article.weight,
            truncate(&article.title, TITLE_WIDTH)
        );
    }
    out
}

/// Horizontal bar per sentiment class, scaled to the largest total.
pub fn render_tally_chart(tally: &WeightedTally) -> String {
    let max = tally
        .entries()
        .iter()
        .map(|(_, total)| *total)
        .fold(0.0_f64, f64::max);

    let mut out = String::from("Sentiment Distribution (Weighted by Recency)\n");
    for (class, total) in tally.entries() {
        let len = if max > 0.0 {
            ((total / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<9} {:<width$} {:.4}",
            class.to_string(),
            "█".repeat(len),
            total,
            width = BAR_WIDTH
        );
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
