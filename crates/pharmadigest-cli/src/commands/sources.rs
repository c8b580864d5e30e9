use anyhow::Result;

use pharmadigest_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("Sources ({}):\n", config.sources.len());

    for source in &config.sources {
        println!("  {}", source.name);
        println!("    URL: {}", source.url);
    }

    Ok(())
}
