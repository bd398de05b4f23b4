use crate::config::AppConfig;
use anyhow::Result;
use colored::*;
use comfy_table::{Cell, Color, Table};
use hornbook_core::MasteryLevel;
use hornbook_sqlite::{ProgressStore, SqliteConfig, SqlitePool};

/// Show the overall summary and a per-row mastery table
pub fn show(config: &AppConfig, format: &str) -> Result<()> {
    let pool = SqlitePool::new(SqliteConfig::new(&config.database_path()))?;
    let store = ProgressStore::new(pool);

    let summary = store.overall()?;
    let entries = store.list()?;

    match format {
        "json" => {
            let data = serde_json::json!({
                "summary": {
                    "total_lessons": summary.total_lessons,
                    "lessons_started": summary.lessons_started,
                    "lessons_mastered": summary.lessons_mastered,
                    "total_problems_attempted": summary.total_problems_attempted,
                    "problems_mastered": summary.problems_mastered,
                },
                "entries": entries
                    .iter()
                    .map(|entry| {
                        serde_json::json!({
                            "lesson_id": entry.progress.lesson_id,
                            "lesson_title": entry.lesson_title,
                            "problem_id": entry.progress.problem_id,
                            "attempts": entry.progress.attempts,
                            "success_rate": entry.progress.success_rate(),
                            "mastery": entry.progress.mastery.as_str(),
                            "last_attempt_at": entry.progress.last_attempt_at.to_rfc3339(),
                        })
                    })
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        _ => {
            println!("Student Progress\n");
            println!(
                "  Lessons started:  {} of {}",
                summary.lessons_started, summary.total_lessons
            );
            println!("  Lessons mastered: {}", summary.lessons_mastered);
            println!(
                "  Problems tried:   {} ({} mastered)",
                summary.total_problems_attempted, summary.problems_mastered
            );

            if entries.is_empty() {
                println!("\nNo attempts recorded yet");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Lesson", "Scope", "Attempts", "Success", "Mastery"]);
            for entry in &entries {
                let scope = match entry.progress.problem_id {
                    Some(id) => format!("problem {}", id),
                    None => "lesson".to_string(),
                };
                table.add_row(vec![
                    Cell::new(&entry.lesson_title),
                    Cell::new(scope),
                    Cell::new(entry.progress.attempts),
                    Cell::new(format!("{:.0}%", entry.progress.success_rate() * 100.0)),
                    mastery_cell(entry.progress.mastery),
                ]);
            }
            println!("\n{table}");
        }
    }

    Ok(())
}

/// Record one attempt against a lesson or a problem within it
///
/// The argument parser guarantees exactly one outcome flag, so `correct`
/// alone carries the result.
pub fn record(config: &AppConfig, lesson: i64, problem: Option<i64>, correct: bool) -> Result<()> {
    let pool = SqlitePool::new(SqliteConfig::new(&config.database_path()))?;
    let store = ProgressStore::new(pool);

    let updated = store.record_attempt(lesson, problem, correct)?;

    let outcome = if correct {
        "correct".green()
    } else {
        "incorrect".red()
    };
    match problem {
        Some(id) => println!(
            "{} Recorded {} attempt on lesson {}, problem {}",
            "✓".green(),
            outcome,
            lesson,
            id
        ),
        None => println!(
            "{} Recorded {} attempt on lesson {}",
            "✓".green(),
            outcome,
            lesson
        ),
    }
    println!(
        "  Attempts: {}  Success: {:.0}%  Mastery: {}",
        updated.attempts,
        updated.success_rate() * 100.0,
        updated.mastery.as_str().yellow()
    );

    Ok(())
}

fn mastery_cell(mastery: MasteryLevel) -> Cell {
    match mastery {
        MasteryLevel::Mastered => Cell::new(mastery.as_str()).fg(Color::Green),
        MasteryLevel::Practicing => Cell::new(mastery.as_str()).fg(Color::Yellow),
        MasteryLevel::Learning => Cell::new(mastery.as_str()).fg(Color::Cyan),
        MasteryLevel::NotStarted => Cell::new(mastery.as_str()),
    }
}
