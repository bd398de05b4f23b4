use crate::config::AppConfig;
use anyhow::Result;
use colored::*;
use hornbook_ingest::{IngestConfig, WorksheetPipeline};
use hornbook_sqlite::{SqliteConfig, SqlitePool};
use std::path::Path;

/// Turn a worksheet file into a lesson with practice problems
pub fn execute(config: &AppConfig, file: &Path, topic: Option<i64>) -> Result<()> {
    let pool = SqlitePool::new(SqliteConfig::new(&config.database_path()))?;
    let pipeline = WorksheetPipeline::new(
        pool,
        IngestConfig {
            topic_id: topic,
            ..IngestConfig::default()
        },
    );

    let report = pipeline.ingest(file)?;

    println!(
        "{} Ingested {} ({})",
        "✓".green(),
        file.display().to_string().yellow(),
        report.kind.as_str()
    );
    println!("  Lesson id: {}", report.lesson_id);
    println!("  Problems extracted:   {}", report.problems_found);
    if report.problems_synthesized > 0 {
        println!(
            "  Problems synthesized: {} (worksheet was thin)",
            report.problems_synthesized
        );
    }

    Ok(())
}
