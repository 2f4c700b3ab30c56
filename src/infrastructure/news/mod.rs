pub mod mock_news;
pub mod relative_time;
pub mod rss;
pub mod sentiment_analyzer;
pub mod snapshot;

pub use mock_news::MockArticleSource;
pub use rss::RssArticleSource;
pub use sentiment_analyzer::VaderScorer;
pub use snapshot::{SnapshotArticleSource, SnapshotStore};
