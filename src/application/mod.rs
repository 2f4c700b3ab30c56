// Weighted sentiment fold over articles
pub mod aggregator;

// Run orchestration
pub mod pipeline;
