// Domain-specific error types
pub mod errors;

// Articles and scored articles
pub mod news;

// Port interfaces
pub mod ports;

// Age estimation and decay weighting
pub mod recency;

// Sentiment classes
pub mod sentiment;

// Weighted per-class totals
pub mod tally;
