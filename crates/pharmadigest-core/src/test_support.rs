//! Shared fixtures for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use crate::feed::{Article, ArticleSource, FeedSource, FetchOutcome};

/// Serves canned articles per source name; unknown sources fail
pub struct StubSource {
    pub feeds: HashMap<String, Vec<Article>>,
    pub calls: Mutex<Vec<(String, u32)>>,
}

impl StubSource {
    pub fn new(feeds: Vec<(&str, Vec<Article>)>) -> Self {
        Self {
            feeds: feeds.into_iter().map(|(name, a)| (name.to_string(), a)).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ArticleSource for StubSource {
    async fn fetch(&self, source: &FeedSource, max_age_days: u32) -> FetchOutcome {
        self.calls.lock().unwrap().push((source.name.clone(), max_age_days));

        match self.feeds.get(&source.name) {
            Some(articles) => FetchOutcome::Fetched {
                source: source.name.clone(),
                articles: articles.clone(),
            },
            None => FetchOutcome::Failed {
                source: source.name.clone(),
                reason: "connection refused".to_string(),
            },
        }
    }
}

pub fn article(source: &str, title: &str, summary: &str) -> Article {
    Article {
        title: title.to_string(),
        link: format!("https://example.com/{}", title.len()),
        published: "2025-03-04T10:00:00+00:00".to_string(),
        summary: summary.to_string(),
        source: source.to_string(),
    }
}

pub fn feed_sources(names: &[&str]) -> Vec<FeedSource> {
    names
        .iter()
        .map(|n| FeedSource::new(*n, format!("https://example.com/{}.xml", n)))
        .collect()
}
