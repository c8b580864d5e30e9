use super::buckets::CategoryBuckets;
use super::record::CategorizedRecord;
use crate::classify::categorize;
use crate::feed::{Article, ArticleSource, FeedSource, FetchOutcome};

/// Per-source result of a fetch pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStatus {
    pub source: String,
    pub fetched: usize,
    pub error: Option<String>,
}

impl From<&FetchOutcome> for SourceStatus {
    fn from(outcome: &FetchOutcome) -> Self {
        let error = match outcome {
            FetchOutcome::Failed { reason, .. } => Some(reason.clone()),
            FetchOutcome::Fetched { .. } => None,
        };

        Self {
            source: outcome.source().to_string(),
            fetched: outcome.article_count(),
            error,
        }
    }
}

/// Everything collected in one fetch-and-classify pass
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub buckets: CategoryBuckets,
    pub sources: Vec<SourceStatus>,
    /// Articles fetched across all sources, classified or not
    pub fetched: usize,
}

impl Aggregation {
    /// Classify already-fetched articles alongside their per-source statuses
    pub fn from_articles(articles: &[Article], sources: Vec<SourceStatus>) -> Self {
        Self {
            buckets: bucket_articles(articles),
            sources,
            fetched: articles.len(),
        }
    }

    /// (bucket name, record count) in report order
    pub fn category_counts(&self) -> Vec<(&'static str, usize)> {
        self.buckets
            .iter()
            .map(|(category, records)| (category.bucket_name(), records.len()))
            .collect()
    }
}

/// Fetch every source in order, concatenating their articles
pub async fn fetch_all(
    fetcher: &dyn ArticleSource,
    sources: &[FeedSource],
    max_age_days: u32,
) -> (Vec<Article>, Vec<SourceStatus>) {
    let mut articles = Vec::new();
    let mut statuses = Vec::with_capacity(sources.len());

    for source in sources {
        let outcome = fetcher.fetch(source, max_age_days).await;
        statuses.push(SourceStatus::from(&outcome));
        articles.extend(outcome.into_articles());
    }

    tracing::info!("Total articles collected: {}", articles.len());

    (articles, statuses)
}

/// File each article into every bucket whose keywords it matches
pub fn bucket_articles(articles: &[Article]) -> CategoryBuckets {
    let mut buckets = CategoryBuckets::new();

    for article in articles {
        let categories = categorize(article);
        if categories.is_empty() {
            tracing::debug!("No category for '{}'", article.title);
            continue;
        }

        let record = CategorizedRecord::from_article(article);
        for category in categories {
            buckets.push(category, record.clone());
        }
    }

    for (category, records) in buckets.iter() {
        tracing::info!("{} articles: {}", category.bucket_name(), records.len());
    }

    buckets
}

/// Fetch from all sources and bucket the results
pub async fn aggregate(
    fetcher: &dyn ArticleSource,
    sources: &[FeedSource],
    max_age_days: u32,
) -> Aggregation {
    let (articles, statuses) = fetch_all(fetcher, sources, max_age_days).await;
    Aggregation::from_articles(&articles, statuses)
}
