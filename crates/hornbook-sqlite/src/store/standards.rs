//! Educational standards storage

use crate::connection::SqlitePool;
use crate::error::SqliteResult;
use hornbook_core::{NewStandard, Standard};
use rusqlite::params;

/// SQLite storage for standard codes
#[derive(Clone)]
pub struct StandardStore {
    pool: SqlitePool,
}

impl StandardStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a standard and return its id
    pub fn add(&self, standard: &NewStandard) -> SqliteResult<i64> {
        self.pool.with_connection(|conn| {
            conn.execute(
                "INSERT INTO standards (subject_id, grade_level, code, description)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    standard.subject_id,
                    standard.grade_level,
                    standard.code,
                    standard.description,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Standards for a subject, ordered by grade then code
    pub fn list_for_subject(&self, subject_id: i64) -> SqliteResult<Vec<Standard>> {
        self.pool.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, subject_id, grade_level, code, description
                 FROM standards
                 WHERE subject_id = ?1
                 ORDER BY grade_level, code",
            )?;
            let standards = stmt
                .query_map([subject_id], row_to_standard)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(standards)
        })
    }

    /// Total number of standards
    pub fn count(&self) -> SqliteResult<i64> {
        self.pool.with_connection(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM standards", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}

fn row_to_standard(row: &rusqlite::Row) -> rusqlite::Result<Standard> {
    Ok(Standard {
        id: row.get(0)?,
        subject_id: row.get(1)?,
        grade_level: row.get(2)?,
        code: row.get(3)?,
        description: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::curriculum::CurriculumStore;
    use hornbook_core::NewSubject;

    #[test]
    fn test_add_and_list_ordered() {
        let pool = SqlitePool::memory().unwrap();
        let curriculum = CurriculumStore::new(pool.clone());
        let store = StandardStore::new(pool);

        let subject_id = curriculum
            .add_subject(&NewSubject::new("Mathematics"))
            .unwrap();

        store
            .add(&NewStandard::new(
                subject_id,
                4,
                "4.NBT.B.4",
                "Fluently add and subtract multi-digit whole numbers",
            ))
            .unwrap();
        store
            .add(&NewStandard::new(
                subject_id,
                3,
                "3.OA.A.1",
                "Interpret products of whole numbers",
            ))
            .unwrap();

        let standards = store.list_for_subject(subject_id).unwrap();
        assert_eq!(standards.len(), 2);
        assert_eq!(standards[0].grade_level, 3);
        assert_eq!(standards[0].code, "3.OA.A.1");
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_orphan_standard_rejected() {
        let pool = SqlitePool::memory().unwrap();
        let store = StandardStore::new(pool);

        let result = store.add(&NewStandard::new(42, 3, "3.OA.A.1", ""));
        assert!(result.is_err());
    }
}
