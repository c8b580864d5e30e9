mod fetcher;
mod models;
mod parser;

pub use fetcher::{retain_recent, ArticleSource, FeedFetcher};
pub use models::{Article, FeedSource, FetchOutcome};
pub use parser::{parse_feed, MAX_ENTRIES_PER_FEED};
