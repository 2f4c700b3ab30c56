use crate::domain::sentiment::SentimentClass;
use serde::{Deserialize, Serialize};

/// Running sum of decay weights per sentiment class for one analysis run.
///
/// Totals start at zero and only grow; negative or non-finite contributions
/// are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedTally {
    positive: f64,
    neutral: f64,
    negative: f64,
}

impl WeightedTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, class: SentimentClass, weight: f64) {
        if !weight.is_finite() || weight < 0.0 {
            return;
        }
        *self.slot_mut(class) += weight;
    }

    pub fn get(&self, class: SentimentClass) -> f64 {
        match class {
            SentimentClass::Positive => self.positive,
            SentimentClass::Neutral => self.neutral,
            SentimentClass::Negative => self.negative,
        }
    }

    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }

    /// Class with the largest weighted total, `None` while everything is zero.
    /// Ties resolve in [`SentimentClass::ALL`] order.
    pub fn dominant(&self) -> Option<SentimentClass> {
        SentimentClass::ALL
            .into_iter()
            .filter(|c| self.get(*c) > 0.0)
            .fold(None, |best: Option<SentimentClass>, c| match best {
                Some(b) if self.get(b) >= self.get(c) => Some(b),
                _ => Some(c),
            })
    }

    /// `(class, total)` pairs in display order.
    pub fn entries(&self) -> [(SentimentClass, f64); 3] {
        SentimentClass::ALL.map(|c| (c, self.get(c)))
    }

    fn slot_mut(&mut self, class: SentimentClass) -> &mut f64 {
        match class {
            SentimentClass::Positive => &mut self.positive,
            SentimentClass::Neutral => &mut self.neutral,
            SentimentClass::Negative => &mut self.negative,
        }
    }
}
