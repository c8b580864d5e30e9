use crate::classify::extract_company;
use crate::feed::Article;

/// Longest summary kept in a report row, in characters
pub const SUMMARY_MAX_CHARS: usize = 200;

/// Date shown for articles without a publish timestamp
pub const MISSING_DATE: &str = "N/A";

const DATE_CHARS: usize = 10;

/// Report row derived from an [`Article`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedRecord {
    pub company: String,
    pub date: String,
    pub title: String,
    pub source: String,
    pub url: String,
    pub summary: String,
}

impl CategorizedRecord {
    pub fn from_article(article: &Article) -> Self {
        let date = if article.published.is_empty() {
            MISSING_DATE.to_string()
        } else {
            article.published.chars().take(DATE_CHARS).collect()
        };

        Self {
            company: extract_company(&article.title),
            date,
            title: article.title.clone(),
            source: article.source.clone(),
            url: article.link.clone(),
            summary: truncate_summary(&article.summary),
        }
    }
}

/// Cap a summary at [`SUMMARY_MAX_CHARS`] characters, appending "..." when cut
pub fn truncate_summary(summary: &str) -> String {
    match summary.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((end, _)) => format!("{}...", &summary[..end]),
        None => summary.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_at_limit_unchanged() {
        let summary = "x".repeat(200);
        assert_eq!(truncate_summary(&summary), summary);
    }

    #[test]
    fn test_summary_over_limit_truncated() {
        let summary = "x".repeat(201);
        let truncated = truncate_summary(&summary);
        assert_eq!(truncated, format!("{}...", "x".repeat(200)));
        assert_eq!(truncated.chars().count(), 203);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let summary = "é".repeat(250);
        let truncated = truncate_summary(&summary);
        assert_eq!(truncated, format!("{}...", "é".repeat(200)));
    }

    #[test]
    fn test_record_from_article() {
        let article = Article {
            title: "Gilead Sciences Completes acquisition".to_string(),
            link: "https://example.com/gilead".to_string(),
            published: "2025-03-04T10:00:00+00:00".to_string(),
            summary: "Deal closes.".to_string(),
            source: "BioSpace".to_string(),
        };

        let record = CategorizedRecord::from_article(&article);
        assert_eq!(record.company, "Gilead Sciences Completes");
        assert_eq!(record.date, "2025-03-04");
        assert_eq!(record.title, article.title);
        assert_eq!(record.source, "BioSpace");
        assert_eq!(record.url, "https://example.com/gilead");
        assert_eq!(record.summary, "Deal closes.");
    }

    #[test]
    fn test_record_without_date() {
        let article = Article {
            title: "a small note".to_string(),
            ..Default::default()
        };

        let record = CategorizedRecord::from_article(&article);
        assert_eq!(record.date, MISSING_DATE);
        assert_eq!(record.company, "Unknown");
    }

    #[test]
    fn test_short_published_kept_whole() {
        let article = Article {
            published: "2025".to_string(),
            ..Default::default()
        };
        assert_eq!(CategorizedRecord::from_article(&article).date, "2025");
    }
}
