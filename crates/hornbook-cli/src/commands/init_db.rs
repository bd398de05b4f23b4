use crate::config::AppConfig;
use anyhow::Result;
use colored::*;
use hornbook_sqlite::{SqliteConfig, SqlitePool};
use tracing::debug;

/// Create the database file and bring the schema up to date
///
/// Safe to run repeatedly; migrations that already ran are skipped.
pub fn execute(config: &AppConfig) -> Result<()> {
    let path = config.database_path();
    debug!(path = %path.display(), "Initializing database");

    let pool = SqlitePool::new(SqliteConfig::new(&path))?;
    let stats = pool.stats()?;

    println!(
        "{} Database initialized at {}",
        "✓".green(),
        path.display().to_string().yellow()
    );
    println!("  Size: {} bytes", stats.total_size_bytes);

    Ok(())
}
