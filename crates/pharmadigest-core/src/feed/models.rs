use serde::{Deserialize, Serialize};

/// A named RSS/Atom feed in the source registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Represents an article taken from a feed entry.
/// Missing entry fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub link: String,
    /// RFC 3339 publish timestamp, or empty when the entry carries none
    pub published: String,
    pub summary: String,
    /// Name of the [`FeedSource`] this article came from
    pub source: String,
}

/// Outcome of fetching a single source
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Fetched {
        source: String,
        articles: Vec<Article>,
    },
    Failed {
        source: String,
        reason: String,
    },
}

impl FetchOutcome {
    pub fn source(&self) -> &str {
        match self {
            Self::Fetched { source, .. } | Self::Failed { source, .. } => source,
        }
    }

    pub fn article_count(&self) -> usize {
        match self {
            Self::Fetched { articles, .. } => articles.len(),
            Self::Failed { .. } => 0,
        }
    }

    /// Check if the fetch failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn into_articles(self) -> Vec<Article> {
        match self {
            Self::Fetched { articles, .. } => articles,
            Self::Failed { .. } => Vec::new(),
        }
    }
}
