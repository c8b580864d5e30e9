//! Fetches biotech and pharma RSS feeds, files articles under business-event
//! categories by keyword, and writes a monthly Excel digest.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod feed;
pub mod pipeline;
pub mod report;

#[cfg(test)]
mod test_support;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use pipeline::{ReportPipeline, RunOutcome, RunState, RunSummary};
