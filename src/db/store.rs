//! Connection ownership and schema initialization, plus the `RecordStore`
//! trait wiring that forwards to the per-entity statement modules.

use rusqlite::{Connection, Error as SqlError, ErrorCode};

use crate::models::{Student, Subject, Teacher};

use super::{RecordStore, StoreConfig, StoreError};

/// SQLite-backed record store. Holds `None` until `connect` succeeds, so the
/// application can come up in a disconnected state and attach to the database
/// only once the UI is ready. The connection closes on drop.
pub struct SqliteStore {
    config: StoreConfig,
    conn: Option<Connection>,
}

impl SqliteStore {
    /// Build a disconnected store around an injected location.
    pub fn new(config: StoreConfig) -> Self {
        Self { config, conn: None }
    }

    /// Open the configured database and run the idempotent schema statements.
    /// On any failure the handle stays closed and the error carries the
    /// diagnostic; no retry is attempted.
    pub fn connect(&mut self) -> Result<(), StoreError> {
        let conn = self.config.open()?;
        ensure_schema(&conn)?;
        self.conn = Some(conn);
        Ok(())
    }

    /// Whether a live connection is currently held.
    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    pub(crate) fn conn(&self) -> Option<&Connection> {
        self.conn.as_ref()
    }

    pub(crate) fn conn_or_err(&self) -> Result<&Connection, StoreError> {
        self.conn.as_ref().ok_or(StoreError::NotConnected)
    }

    /// Sum the row counts of all three tables. The counts are three separate
    /// queries, so a concurrent external writer could skew the total; fine
    /// for a single-user tool. Zero while disconnected, matching the
    /// empty-read contract of the list queries.
    pub fn total_records(&self) -> i64 {
        let Some(conn) = self.conn() else {
            return 0;
        };
        count_rows(conn, "SELECT COUNT(*) FROM teachers")
            + count_rows(conn, "SELECT COUNT(*) FROM students")
            + count_rows(conn, "SELECT COUNT(*) FROM subjects")
    }
}

/// Create the three tables if they do not exist yet. Safe to run on every
/// connect; there is no migration mechanism beyond this.
pub(crate) fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS teachers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            department TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            grade INTEGER CHECK (grade BETWEEN 1 AND 5)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS subjects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

fn count_rows(conn: &Connection, sql: &str) -> i64 {
    conn.query_row(sql, [], |row| row.get(0)).unwrap_or(0)
}

/// Coerce SQLite constraint errors into human-readable messages so the UI can
/// show something friendlier than a raw error code. Everything else passes
/// through untouched.
pub(crate) fn map_constraint(err: SqlError, message: &str) -> StoreError {
    if matches!(err.sqlite_error_code(), Some(ErrorCode::ConstraintViolation)) {
        StoreError::Constraint(message.to_string())
    } else {
        StoreError::Sqlite(err)
    }
}

impl RecordStore for SqliteStore {
    fn connect(&mut self) -> Result<(), StoreError> {
        Self::connect(self)
    }

    fn is_connected(&self) -> bool {
        Self::is_connected(self)
    }

    fn all_teachers(&self) -> Vec<Teacher> {
        Self::all_teachers(self)
    }

    fn add_teacher(&mut self, full_name: &str, department: &str) -> Result<Teacher, StoreError> {
        Self::add_teacher(self, full_name, department)
    }

    fn delete_teacher(&mut self, id: i64) -> Result<(), StoreError> {
        Self::delete_teacher(self, id)
    }

    fn teacher_by_id(&self, id: i64) -> Option<Teacher> {
        Self::teacher_by_id(self, id)
    }

    fn all_students(&self) -> Vec<Student> {
        Self::all_students(self)
    }

    fn add_student(&mut self, full_name: &str, grade: i64) -> Result<Student, StoreError> {
        Self::add_student(self, full_name, grade)
    }

    fn delete_student(&mut self, id: i64) -> Result<(), StoreError> {
        Self::delete_student(self, id)
    }

    fn student_by_id(&self, id: i64) -> Option<Student> {
        Self::student_by_id(self, id)
    }

    fn all_subjects(&self) -> Vec<Subject> {
        Self::all_subjects(self)
    }

    fn add_subject(&mut self, name: &str) -> Result<Subject, StoreError> {
        Self::add_subject(self, name)
    }

    fn delete_subject(&mut self, id: i64) -> Result<(), StoreError> {
        Self::delete_subject(self, id)
    }

    fn subject_by_id(&self, id: i64) -> Option<Subject> {
        Self::subject_by_id(self, id)
    }

    fn total_records(&self) -> i64 {
        Self::total_records(self)
    }
}
