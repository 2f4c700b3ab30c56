//! Analysis parameters: decay rate and scorer options.

use super::{EnvLookup, parse_or};
use crate::domain::recency::DEFAULT_DECAY_LAMBDA;
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct AnalysisEnvConfig {
    pub decay_lambda: f64,
    /// Add equity keyword boosts on top of VADER's compound score.
    pub financial_boost: bool,
}

impl Default for AnalysisEnvConfig {
    fn default() -> Self {
        Self {
            decay_lambda: DEFAULT_DECAY_LAMBDA,
            financial_boost: false,
        }
    }
}

impl AnalysisEnvConfig {
    pub fn from_vars(vars: EnvLookup<'_>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            decay_lambda: parse_or(vars, "DECAY_LAMBDA", defaults.decay_lambda)?,
            financial_boost: parse_or(vars, "FINANCIAL_BOOST", defaults.financial_boost)?,
        })
    }
}
