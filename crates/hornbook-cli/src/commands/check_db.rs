use crate::config::AppConfig;
use anyhow::Result;
use comfy_table::{Cell, Color, Table};
use hornbook_sqlite::{
    ApiCacheStore, CurriculumStore, ProgressStore, SqliteConfig, SqlitePool, StandardStore,
    UploadStore,
};

/// Report row counts for every table plus per-subject content totals
pub fn execute(config: &AppConfig, format: &str) -> Result<()> {
    let path = config.database_path();
    let pool = SqlitePool::new(SqliteConfig::new(&path))?;

    let curriculum = CurriculumStore::new(pool.clone());
    let counts = curriculum.counts()?;
    let breakdown = curriculum.subject_breakdown()?;
    let uploads = UploadStore::new(pool.clone()).count()?;
    let progress = ProgressStore::new(pool.clone()).count()?;
    let cache = ApiCacheStore::new(pool.clone()).count()?;
    let standards = StandardStore::new(pool.clone()).count()?;
    let size_bytes = pool.stats()?.total_size_bytes;

    let tables = [
        ("subjects", counts.subjects),
        ("topics", counts.topics),
        ("lessons", counts.lessons),
        ("practice_problems", counts.problems),
        ("uploaded_files", uploads),
        ("student_progress", progress),
        ("api_cache", cache),
        ("standards", standards),
    ];

    match format {
        "json" => {
            let data = serde_json::json!({
                "database": path.display().to_string(),
                "size_bytes": size_bytes,
                "tables": tables
                    .iter()
                    .map(|(name, rows)| ((*name).to_string(), serde_json::Value::from(*rows)))
                    .collect::<serde_json::Map<String, serde_json::Value>>(),
                "subjects": breakdown
                    .iter()
                    .map(|s| {
                        serde_json::json!({
                            "name": s.subject_name,
                            "icon": s.icon,
                            "topics": s.topic_count,
                            "lessons": s.lesson_count,
                            "problems": s.problem_count,
                        })
                    })
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        _ => {
            println!("Database: {}", path.display());
            println!("Size: {} bytes\n", size_bytes);

            let mut count_table = Table::new();
            count_table.set_header(vec!["Table", "Rows"]);
            for (name, rows) in tables {
                let rows_cell = if rows == 0 {
                    Cell::new(rows).fg(Color::Yellow)
                } else {
                    Cell::new(rows).fg(Color::Green)
                };
                count_table.add_row(vec![Cell::new(name), rows_cell]);
            }
            println!("{count_table}");

            if !breakdown.is_empty() {
                let mut subject_table = Table::new();
                subject_table
                    .set_header(vec!["Subject", "Icon", "Topics", "Lessons", "Problems"]);
                for subject in &breakdown {
                    subject_table.add_row(vec![
                        Cell::new(&subject.subject_name),
                        Cell::new(&subject.icon),
                        Cell::new(subject.topic_count),
                        Cell::new(subject.lesson_count),
                        Cell::new(subject.problem_count),
                    ]);
                }
                println!("\n{subject_table}");
            }
        }
    }

    Ok(())
}
