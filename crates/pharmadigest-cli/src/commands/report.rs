use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Utc;

use pharmadigest_core::{feed::FeedFetcher, AppConfig, ReportPipeline, RunOutcome};

const RULE_WIDTH: usize = 70;

fn banner(title: &str) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("{:^width$}", title, width = RULE_WIDTH);
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub async fn run(config: &AppConfig, days_back: Option<u32>, output_dir: Option<PathBuf>) -> Result<()> {
    let days_back = days_back.unwrap_or(config.sync.days_back);

    banner("BIOTECH & PHARMA NEWS AGENT");
    println!("Run Date: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Looking back: {} days", days_back);

    let fetcher = FeedFetcher::new(config)?;
    let mut pipeline = ReportPipeline::new(config, &fetcher);
    if let Some(dir) = output_dir {
        pipeline = pipeline.with_output_dir(dir);
    }

    println!("\nCollecting news from {} sources...", config.sources.len());
    let summary = pipeline.run(days_back).await?;

    for status in &summary.sources {
        match &status.error {
            None => println!("  ✓ {}: {} articles", status.source, status.fetched),
            Some(err) => println!("  ✗ {}: {}", status.source, err),
        }
    }
    println!("\nTotal articles collected: {}", summary.fetched);

    match summary.outcome {
        RunOutcome::Written(path) => {
            println!();
            for (bucket, count) in &summary.category_counts {
                println!("  {}: {}", bucket, count);
            }
            banner("REPORT COMPLETE");
            println!("Report ready: {}", path.display());
            Ok(())
        }
        RunOutcome::NoArticles => {
            println!("\nWarning: no articles collected. Check RSS feeds.");
            bail!("report generation failed: no articles were fetched from any source")
        }
    }
}
