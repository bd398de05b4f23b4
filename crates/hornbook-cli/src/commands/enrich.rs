use crate::config::AppConfig;
use anyhow::Result;
use colored::*;
use hornbook_enrichment::{FactClient, FactOrigin, FactSource};
use hornbook_sqlite::{SqliteConfig, SqlitePool};

/// Fetch a supplementary fact about a term and show where it came from
pub async fn execute(config: &AppConfig, term: &str, source: FactSource) -> Result<()> {
    let pool = SqlitePool::new(SqliteConfig::new(&config.database_path()))?;
    let client = FactClient::new(pool, config.to_enrichment_config())?;

    let fact = client.fetch(source, term).await;

    println!("{}", fact.text);

    let origin = match fact.origin {
        FactOrigin::Cache => fact.origin.as_str().cyan(),
        FactOrigin::Network => fact.origin.as_str().green(),
        FactOrigin::Fallback => fact.origin.as_str().yellow(),
    };
    println!("\n{} {} ({})", "Source:".bold(), source.as_str(), origin);

    Ok(())
}
