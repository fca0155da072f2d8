use rusqlite::{params, Connection, OptionalExtension};

use crate::models::Student;

use super::store::{map_constraint, SqliteStore};
use super::StoreError;

impl SqliteStore {
    /// Retrieve every student in id order, reading an unreachable store as an
    /// empty table.
    pub fn all_students(&self) -> Vec<Student> {
        let Some(conn) = self.conn() else {
            return Vec::new();
        };
        query_students(conn).unwrap_or_default()
    }

    /// Insert a new student row. The grade CHECK constraint is the one piece
    /// of validation the schema enforces on its own; if a bad value gets here
    /// anyway it comes back as a `Constraint` error.
    pub fn add_student(&self, full_name: &str, grade: i64) -> Result<Student, StoreError> {
        let conn = self.conn_or_err()?;
        conn.execute(
            "INSERT INTO students (full_name, grade) VALUES (?1, ?2)",
            params![full_name, grade],
        )
        .map_err(|err| map_constraint(err, "Grade must be between 1 and 5"))?;

        Ok(Student {
            id: conn.last_insert_rowid(),
            full_name: full_name.to_string(),
            grade,
        })
    }

    /// Remove a student row, reporting `NotFound` when the id matches nothing.
    pub fn delete_student(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.conn_or_err()?;
        let deleted = conn.execute("DELETE FROM students WHERE id = ?1", params![id])?;
        if deleted == 0 {
            Err(StoreError::NotFound)
        } else {
            Ok(())
        }
    }

    /// Look up a single student by id.
    pub fn student_by_id(&self, id: i64) -> Option<Student> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT id, full_name, grade FROM students WHERE id = ?1",
            params![id],
            student_from_row,
        )
        .optional()
        .ok()
        .flatten()
    }
}

fn query_students(conn: &Connection) -> rusqlite::Result<Vec<Student>> {
    let mut stmt = conn.prepare("SELECT id, full_name, grade FROM students ORDER BY id")?;
    let students = stmt
        .query_map([], student_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(students)
}

fn student_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        full_name: row.get(1)?,
        grade: row.get(2)?,
    })
}
