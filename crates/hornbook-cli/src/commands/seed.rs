use crate::config::AppConfig;
use anyhow::Result;
use colored::*;
use hornbook_curriculum::{builtin, standards, Seeder};
use hornbook_sqlite::{SqliteConfig, SqlitePool};
use tracing::debug;

/// Seed the builtin curriculum
///
/// `massive` selects the full subject pack plus curriculum standards;
/// otherwise the compact starter pack is loaded. Subjects that already
/// exist are left untouched, so reruns are safe.
pub fn execute(config: &AppConfig, massive: bool) -> Result<()> {
    let pool = SqlitePool::new(SqliteConfig::new(&config.database_path()))?;
    let seeder = Seeder::new(pool);

    let subjects = if massive {
        builtin::massive()
    } else {
        builtin::starter()
    };
    debug!(subjects = subjects.len(), massive, "Seeding curriculum");

    let report = seeder.seed(&subjects)?;

    if report.subjects_inserted == 0 {
        println!(
            "{} All {} subjects already present; nothing to do",
            "✓".green(),
            report.subjects_skipped
        );
    } else {
        println!("{} Curriculum seeded", "Success:".green().bold());
        println!(
            "  Subjects: {} inserted, {} skipped",
            report.subjects_inserted, report.subjects_skipped
        );
        println!("  Topics:   {}", report.topics_inserted);
        println!("  Lessons:  {}", report.lessons_inserted);
        println!("  Problems: {}", report.problems_inserted);
    }

    if massive {
        let standards_report = seeder.seed_standards(&standards::builtin())?;
        println!(
            "  Standards: {} inserted, {} skipped",
            standards_report.inserted, standards_report.skipped
        );
    }

    Ok(())
}
