use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::aggregate::{fetch_all, Aggregation, SourceStatus};
use crate::config::AppConfig;
use crate::feed::ArticleSource;
use crate::report::{Report, ReportWriter};
use crate::Result;

/// Stage of a report run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Fetching,
    Processing,
    Writing,
    Done,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Fetching => "FETCHING",
            RunState::Processing => "PROCESSING",
            RunState::Writing => "WRITING",
            RunState::Done => "DONE",
            RunState::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// Terminal result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Report written to this path
    Written(PathBuf),
    /// Nothing was fetched from any source; no report produced
    NoArticles,
}

/// What a run did, for the caller to present
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub state: RunState,
    pub sources: Vec<SourceStatus>,
    pub fetched: usize,
    /// (bucket name, record count) in report order; empty when no report was produced
    pub category_counts: Vec<(&'static str, usize)>,
}

/// Sequences fetch, classify and write for one report
pub struct ReportPipeline<'a> {
    config: &'a AppConfig,
    fetcher: &'a dyn ArticleSource,
    writer: ReportWriter,
}

impl<'a> ReportPipeline<'a> {
    pub fn new(config: &'a AppConfig, fetcher: &'a dyn ArticleSource) -> Self {
        Self {
            config,
            fetcher,
            writer: ReportWriter::new(config.output_dir()),
        }
    }

    /// Write into `dir` instead of the configured output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.writer = ReportWriter::new(dir);
        self
    }

    pub async fn run(&self, days_back: u32) -> Result<RunSummary> {
        self.run_at(days_back, Utc::now()).await
    }

    /// Run with an explicit generation time
    pub async fn run_at(&self, days_back: u32, generated_at: DateTime<Utc>) -> Result<RunSummary> {
        let mut state = RunState::Fetching;
        tracing::info!("{}: {} sources, looking back {} days", state, self.config.sources.len(), days_back);

        let (articles, sources) = fetch_all(self.fetcher, &self.config.sources, days_back).await;
        let fetched = articles.len();

        if articles.is_empty() {
            state = RunState::Failed;
            tracing::warn!("{}: no articles collected, check RSS feeds", state);
            return Ok(RunSummary {
                outcome: RunOutcome::NoArticles,
                state,
                sources,
                fetched,
                category_counts: Vec::new(),
            });
        }

        state = RunState::Processing;
        tracing::info!("{}: categorizing {} articles", state, fetched);
        let aggregation = Aggregation::from_articles(&articles, sources);

        state = RunState::Writing;
        tracing::info!("{}: building report", state);
        let report = Report::build(&aggregation.buckets, &self.config.source_names(), generated_at);
        let path = self.writer.write(&report)?;

        state = RunState::Done;
        tracing::info!("{}: report complete", state);

        Ok(RunSummary {
            outcome: RunOutcome::Written(path),
            state,
            category_counts: aggregation.category_counts(),
            sources: aggregation.sources,
            fetched: aggregation.fetched,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{article, feed_sources, StubSource};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn config(names: &[&str]) -> AppConfig {
        AppConfig {
            sources: feed_sources(names),
            ..AppConfig::default()
        }
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_no_articles_fails_without_artifact() {
        let dir = TempDir::new().unwrap();
        let config = config(&["Down", "AlsoDown"]);
        let stub = StubSource::new(vec![]);

        let summary = ReportPipeline::new(&config, &stub)
            .with_output_dir(dir.path())
            .run_at(30, generated_at())
            .await
            .unwrap();

        assert_eq!(summary.outcome, RunOutcome::NoArticles);
        assert_eq!(summary.state, RunState::Failed);
        assert_eq!(summary.sources.len(), 2);
        assert!(summary.sources.iter().all(|s| s.error.is_some()));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_empty_feeds_fail_too() {
        let dir = TempDir::new().unwrap();
        let config = config(&["Quiet"]);
        let stub = StubSource::new(vec![("Quiet", vec![])]);

        let summary = ReportPipeline::new(&config, &stub)
            .with_output_dir(dir.path())
            .run_at(30, generated_at())
            .await
            .unwrap();

        assert_eq!(summary.outcome, RunOutcome::NoArticles);
        assert!(summary.sources[0].error.is_none());
    }

    #[tokio::test]
    async fn test_funding_sheet_from_single_source() {
        let dir = TempDir::new().unwrap();
        let config = config(&["Wire"]);
        let stub = StubSource::new(vec![(
            "Wire",
            vec![
                article("Wire", "Acme Bio Closes Funding", "Led by venture capital"),
                article("Wire", "Zeta Therapeutics", "The company raised capital"),
                article("Wire", "phase 3 readout", "Primary endpoint met"),
            ],
        )]);

        let summary = ReportPipeline::new(&config, &stub)
            .with_output_dir(dir.path())
            .run_at(30, generated_at())
            .await
            .unwrap();

        assert_eq!(summary.state, RunState::Done);
        assert_eq!(summary.fetched, 3);
        assert_eq!(
            summary.category_counts,
            vec![("revenue", 0), ("acquisitions", 0), ("funding", 2), ("new_companies", 0)]
        );

        let expected = dir.path().join("Biotech_Pharma_Report_2025-03.xlsx");
        assert_eq!(summary.outcome, RunOutcome::Written(expected.clone()));
        assert!(expected.exists());
    }

    #[tokio::test]
    async fn test_days_back_reaches_fetcher() {
        let dir = TempDir::new().unwrap();
        let config = config(&["Wire"]);
        let stub = StubSource::new(vec![("Wire", vec![article("Wire", "Deal done", "")])]);

        ReportPipeline::new(&config, &stub)
            .with_output_dir(dir.path())
            .run_at(7, generated_at())
            .await
            .unwrap();

        assert_eq!(stub.calls.lock().unwrap().as_slice(), &[("Wire".to_string(), 7)]);
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        let config = config(&["Wire"]);
        let stub = StubSource::new(vec![("Wire", vec![article("Wire", "Deal done", "")])]);

        let result = ReportPipeline::new(&config, &stub)
            .with_output_dir(blocker.join("out"))
            .run_at(30, generated_at())
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_summary_matches_standalone_aggregation() {
        let dir = TempDir::new().unwrap();
        let config = config(&["Wire", "Down"]);
        let stub = StubSource::new(vec![(
            "Wire",
            vec![
                article("Wire", "Amgen Posts Revenue", "Deal closes next quarter"),
                article("Wire", "Nova Bio founded", "A startup raised a seed round"),
                article("Wire", "Conference recap", "Nothing to file"),
            ],
        )]);

        let expected = crate::aggregate::aggregate(&stub, &config.sources, 30).await;
        let summary = ReportPipeline::new(&config, &stub)
            .with_output_dir(dir.path())
            .run_at(30, generated_at())
            .await
            .unwrap();

        assert_eq!(summary.fetched, expected.fetched);
        assert_eq!(summary.sources, expected.sources);
        assert_eq!(summary.category_counts, expected.category_counts());
        assert_eq!(
            summary.category_counts,
            vec![("revenue", 1), ("acquisitions", 1), ("funding", 1), ("new_companies", 1)]
        );
    }

    #[test]
    fn test_state_display() {
        assert_eq!(RunState::Fetching.to_string(), "FETCHING");
        assert_eq!(RunState::Failed.to_string(), "FAILED");
    }
}
