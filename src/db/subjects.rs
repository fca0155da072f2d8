use rusqlite::{params, Connection, OptionalExtension};

use crate::models::Subject;

use super::store::{map_constraint, SqliteStore};
use super::StoreError;

impl SqliteStore {
    /// Retrieve every subject in id order, reading an unreachable store as an
    /// empty table.
    pub fn all_subjects(&self) -> Vec<Subject> {
        let Some(conn) = self.conn() else {
            return Vec::new();
        };
        query_subjects(conn).unwrap_or_default()
    }

    /// Insert a new subject row, returning the hydrated struct.
    pub fn add_subject(&self, name: &str) -> Result<Subject, StoreError> {
        let conn = self.conn_or_err()?;
        conn.execute("INSERT INTO subjects (name) VALUES (?1)", params![name])
            .map_err(|err| map_constraint(err, "Subject name must not be null"))?;

        Ok(Subject {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    /// Remove a subject row, reporting `NotFound` when the id matches nothing.
    pub fn delete_subject(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.conn_or_err()?;
        let deleted = conn.execute("DELETE FROM subjects WHERE id = ?1", params![id])?;
        if deleted == 0 {
            Err(StoreError::NotFound)
        } else {
            Ok(())
        }
    }

    /// Look up a single subject by id.
    pub fn subject_by_id(&self, id: i64) -> Option<Subject> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT id, name FROM subjects WHERE id = ?1",
            params![id],
            subject_from_row,
        )
        .optional()
        .ok()
        .flatten()
    }
}

fn query_subjects(conn: &Connection) -> rusqlite::Result<Vec<Subject>> {
    let mut stmt = conn.prepare("SELECT id, name FROM subjects ORDER BY id")?;
    let subjects = stmt
        .query_map([], subject_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(subjects)
}

fn subject_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Subject> {
    Ok(Subject {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
