use feed_rs::parser;

use super::models::Article;
use crate::{Error, Result};

/// Entries taken from each feed, in feed order
pub const MAX_ENTRIES_PER_FEED: usize = 100;

/// Parse RSS/Atom feed content into articles attributed to `source_name`
pub fn parse_feed(content: &[u8], source_name: &str) -> Result<Vec<Article>> {
    let feed = parser::parse(content)
        .map_err(|e| Error::FeedParse(e.to_string()))?;

    let articles = feed.entries.into_iter()
        .take(MAX_ENTRIES_PER_FEED)
        .map(|entry| {
            let title = entry.title
                .map(|t| t.content)
                .unwrap_or_default();

            // rel="alternate" (or no rel) is the article itself; replies/edit/self are not
            let link = entry.links.iter()
                .find(|l| l.rel.as_deref().map_or(true, |rel| rel == "alternate"))
                .or_else(|| entry.links.first())
                .map(|l| l.href.clone())
                .unwrap_or_default();

            let published = entry.published
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_default();

            let summary = entry.summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body))
                .unwrap_or_default();

            Article {
                title,
                link,
                published,
                summary,
                source: source_name.to_string(),
            }
        })
        .collect();

    Ok(articles)
}
