use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, Proxy};
use url::Url;

use super::models::{Article, FeedSource, FetchOutcome};
use super::parser::parse_feed;
use crate::config::AppConfig;
use crate::{Error, Result};

const MAX_FEED_BYTES: usize = 5 * 1024 * 1024;
const FEED_USER_AGENT: &str = concat!("pharmadigest/", env!("CARGO_PKG_VERSION"));

/// Something that can turn a configured source into articles
#[async_trait::async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch one source. Failures are reported in the outcome, never propagated.
    async fn fetch(&self, source: &FeedSource, max_age_days: u32) -> FetchOutcome;
}

/// Feed fetcher with HTTP client
pub struct FeedFetcher {
    client: Client,
    enforce_max_age: bool,
}

impl FeedFetcher {
    /// Create a new feed fetcher with configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Self::build_client(config.sync.request_timeout_secs, &config.sync.proxy_url)?;

        Ok(Self {
            client,
            enforce_max_age: config.sync.enforce_max_age,
        })
    }

    /// Build HTTP client with optional proxy
    fn build_client(timeout_secs: u64, proxy_url: &Option<String>) -> Result<Client> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .default_headers(Self::build_headers());

        if let Some(ref proxy) = proxy_url {
            let proxy = Proxy::all(proxy)
                .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
            tracing::info!("Using HTTP proxy for feed fetching");
        }

        builder.build().map_err(Error::Http)
    }

    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "application/rss+xml,application/atom+xml,application/xml;q=0.9,text/xml;q=0.8,*/*;q=0.5"
            )
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9")
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(FEED_USER_AGENT));
        headers
    }

    /// Fetch and parse a feed, surfacing any failure as an error
    pub async fn fetch_feed(&self, source: &FeedSource) -> Result<Vec<Article>> {
        let url = Url::parse(&source.url)?;

        tracing::info!("Fetching from {}: {}", source.name, url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::FeedParse(format!(
                "HTTP {} for URL: {}",
                status,
                source.url
            )));
        }

        if let Some(length) = response.content_length() {
            self.ensure_content_size(length as usize, &source.url)?;
        }

        let content = response.bytes().await?;
        self.ensure_content_size(content.len(), &source.url)?;

        parse_feed(&content, &source.name)
    }

    fn ensure_content_size(&self, size: usize, url: &str) -> Result<()> {
        if size > MAX_FEED_BYTES {
            return Err(Error::FeedParse(format!(
                "Feed too large ({} bytes) for URL: {}",
                size,
                url
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ArticleSource for FeedFetcher {
    async fn fetch(&self, source: &FeedSource, max_age_days: u32) -> FetchOutcome {
        match self.fetch_feed(source).await {
            Ok(articles) => {
                let articles = if self.enforce_max_age {
                    retain_recent(articles, max_age_days, Utc::now())
                } else {
                    articles
                };

                tracing::info!("Found {} articles in '{}'", articles.len(), source.name);

                FetchOutcome::Fetched {
                    source: source.name.clone(),
                    articles,
                }
            }
            Err(e) => {
                tracing::warn!("Error fetching from '{}': {}", source.name, e);

                FetchOutcome::Failed {
                    source: source.name.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Drop articles published more than `max_age_days` before `now`.
/// Articles without a parseable publish date are kept.
pub fn retain_recent(articles: Vec<Article>, max_age_days: u32, now: DateTime<Utc>) -> Vec<Article> {
    let cutoff = now - chrono::Duration::days(i64::from(max_age_days));

    articles
        .into_iter()
        .filter(|article| {
            match DateTime::parse_from_rfc3339(&article.published) {
                Ok(published) => published.with_timezone(&Utc) >= cutoff,
                Err(_) => true,
            }
        })
        .collect()
}
