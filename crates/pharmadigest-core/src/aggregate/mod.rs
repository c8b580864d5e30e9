mod aggregator;
mod buckets;
mod record;

pub use aggregator::{aggregate, bucket_articles, fetch_all, Aggregation, SourceStatus};
pub use buckets::CategoryBuckets;
pub use record::{truncate_summary, CategorizedRecord, MISSING_DATE, SUMMARY_MAX_CHARS};
