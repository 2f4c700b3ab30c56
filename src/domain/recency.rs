//! Recency modelling for news articles.
//!
//! Converts the free-text "time since published" strings rendered by news
//! pages ("3 hours ago", "last week", "2 months ago") into an age in days,
//! and that age into an exponential decay weight.
//!
//! Phrase parsing is a fixed, ordered rule table with a total fallback: it
//! only understands the relative phrases listed in [`estimate_age_days`].

use crate::domain::errors::ConfigError;
use regex::Regex;
use std::sync::LazyLock;

/// Default decay rate; halves the weight roughly every 14 days.
pub const DEFAULT_DECAY_LAMBDA: f64 = 0.05;

/// Age assigned to phrases no rule recognises, so they are heavily discounted.
pub const UNKNOWN_AGE_DAYS: u32 = 180;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("static regex is valid"));

/// How a matched rule turns the phrase into days.
#[derive(Debug, Clone, Copy)]
enum AgeRule {
    /// Fixed age regardless of any number in the phrase.
    Fixed(u32),
    /// First integer in the phrase times the unit length, 0 if there is none.
    PerUnit(u32),
}

/// What a phrase must contain for a rule to apply.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    AnyUnit(&'static [&'static str]),
    Phrase(&'static str, &'static str),
}

/// Evaluated top to bottom, first match wins. "last week" must be checked
/// before the generic "week" rule.
const RULES: &[(Pattern, AgeRule)] = &[
    (Pattern::AnyUnit(&["minute", "hour"]), AgeRule::Fixed(0)),
    (Pattern::AnyUnit(&["day"]), AgeRule::PerUnit(1)),
    (Pattern::Phrase("last", "week"), AgeRule::Fixed(7)),
    (Pattern::AnyUnit(&["week"]), AgeRule::PerUnit(7)),
    (Pattern::Phrase("last", "month"), AgeRule::Fixed(30)),
    (Pattern::AnyUnit(&["month"]), AgeRule::PerUnit(30)),
    (Pattern::AnyUnit(&["year"]), AgeRule::PerUnit(365)),
];

/// Estimate how many days ago an article was published from a relative-time phrase.
///
/// Matching is case-insensitive and per word, singular or plural:
/// - "minute"/"hour" -> 0
/// - "day" -> first integer N (0 if none)
/// - "last week" -> 7, otherwise "week" -> 7 * N (0 if none)
/// - "last month" -> 30, otherwise "month" -> 30 * N (0 if none)
/// - "year" -> 365 * N (0 if none)
/// - anything else, including empty input -> [`UNKNOWN_AGE_DAYS`]
///
/// N is always the first run of digits in the phrase, even when the phrase
/// holds several numbers ("3 days, 2 hours ago" -> 3).
pub fn estimate_age_days(phrase: &str) -> u32 {
    let lowered = phrase.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect();

    for (pattern, rule) in RULES {
        if pattern.matches(&words) {
            return match rule {
                AgeRule::Fixed(days) => *days,
                AgeRule::PerUnit(unit) => first_number(&lowered)
                    .map(|n| n.saturating_mul(*unit))
                    .unwrap_or(0),
            };
        }
    }

    UNKNOWN_AGE_DAYS
}

impl Pattern {
    fn matches(&self, words: &[&str]) -> bool {
        match self {
            Pattern::AnyUnit(units) => words
                .iter()
                .any(|w| units.iter().any(|unit| is_unit(w, unit))),
            Pattern::Phrase(first, second) => words
                .windows(2)
                .any(|pair| pair[0] == *first && pair[1] == *second),
        }
    }
}

fn is_unit(word: &str, unit: &str) -> bool {
    word == unit || word.strip_suffix('s') == Some(unit)
}

/// First maximal run of decimal digits, saturating at `u32::MAX`.
fn first_number(text: &str) -> Option<u32> {
    FIRST_NUMBER
        .find(text)
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
}

/// Exponential recency decay: `weight = exp(-lambda * age_days)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayModel {
    lambda: f64,
}

impl Default for DecayModel {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_DECAY_LAMBDA,
        }
    }
}

impl DecayModel {
    pub fn new(lambda: f64) -> Result<Self, ConfigError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(ConfigError::InvalidDecayLambda { lambda });
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Weight in (0, 1]; exactly 1.0 for a same-day article.
    pub fn weight(&self, age_days: u32) -> f64 {
        decay_weight(age_days, self.lambda)
    }

    /// Age at which the weight drops to one half.
    pub fn half_life_days(&self) -> f64 {
        std::f64::consts::LN_2 / self.lambda
    }
}

/// `exp(-lambda * age_days)`, floored at the smallest positive normal `f64`
/// so very old articles never weigh exactly zero.
pub fn decay_weight(age_days: u32, lambda: f64) -> f64 {
    (-lambda * f64::from(age_days)).exp().max(f64::MIN_POSITIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_phrases() {
        let cases = [
            ("3 hours ago", 0),
            ("5 days ago", 5),
            ("last week", 7),
            ("2 weeks ago", 14),
            ("last month", 30),
            ("3 months ago", 90),
            ("1 year ago", 365),
            ("yesterday", 180),
        ];

        for (phrase, expected) in cases {
            assert_eq!(estimate_age_days(phrase), expected, "phrase '{}'", phrase);
        }
    }

    #[test]
    fn test_case_insensitive_and_embedded_in_source_label() {
        assert_eq!(estimate_age_days("Reuters • 4 DAYS AGO"), 4);
        assert_eq!(estimate_age_days("Yahoo Finance • Last Month"), 30);
        assert_eq!(estimate_age_days("12 minutes ago"), 0);
    }

    #[test]
    fn test_unit_without_number_is_zero() {
        assert_eq!(estimate_age_days("a day ago"), 0);
        assert_eq!(estimate_age_days("weeks ago"), 0);
        assert_eq!(estimate_age_days("a month ago"), 0);
        assert_eq!(estimate_age_days("a year ago"), 0);
    }

    #[test]
    fn test_hour_rule_wins_over_day_rule() {
        assert_eq!(estimate_age_days("1 day 3 hours ago"), 0);
    }

    #[test]
    fn test_first_number_wins() {
        assert_eq!(estimate_age_days("3 days, 2 weeks ago"), 3);
        assert_eq!(estimate_age_days("2 years 6 months ago"), 60);
    }

    #[test]
    fn test_unrecognised_input_falls_back() {
        assert_eq!(estimate_age_days(""), UNKNOWN_AGE_DAYS);
        assert_eq!(estimate_age_days("   "), UNKNOWN_AGE_DAYS);
        assert_eq!(estimate_age_days("Jan 5, 2024"), UNKNOWN_AGE_DAYS);
        assert_eq!(estimate_age_days("today"), UNKNOWN_AGE_DAYS);
    }

    #[test]
    fn test_huge_numbers_saturate() {
        assert_eq!(estimate_age_days("99999999999 days ago"), u32::MAX);
        assert_eq!(estimate_age_days("90000000 years ago"), u32::MAX);
    }

    #[test]
    fn test_decay_at_zero_is_one() {
        assert_eq!(decay_weight(0, DEFAULT_DECAY_LAMBDA), 1.0);
        assert_eq!(DecayModel::default().weight(0), 1.0);
    }

    #[test]
    fn test_decay_strictly_decreasing_and_bounded() {
        let model = DecayModel::default();
        let mut previous = model.weight(0);
        for age in 1..=2000 {
            let w = model.weight(age);
            assert!(w > 0.0 && w <= 1.0, "age {} weight {}", age, w);
            assert!(w < previous, "age {} not decreasing", age);
            previous = w;
        }
    }

    #[test]
    fn test_decay_never_reaches_zero() {
        assert!(DecayModel::default().weight(u32::MAX) > 0.0);
    }

    #[test]
    fn test_two_day_weight() {
        let w = DecayModel::default().weight(2);
        assert!((w - 0.904837).abs() < 1e-6);
    }

    #[test]
    fn test_half_life() {
        let model = DecayModel::default();
        assert!((model.half_life_days() - 13.8629).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_lambda_rejected() {
        assert!(DecayModel::new(0.0).is_err());
        assert!(DecayModel::new(-0.1).is_err());
        assert!(DecayModel::new(f64::NAN).is_err());
        assert!(DecayModel::new(f64::INFINITY).is_err());
        assert!(DecayModel::new(0.1).is_ok());
    }
}
