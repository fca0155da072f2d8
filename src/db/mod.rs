//! Persistence module split across logical submodules. `SqliteStore` owns the
//! connection and the schema; the per-entity files each encapsulate the CRUD
//! statements for one table so the rest of the codebase can stay focused on
//! view-model and UI state management.

mod config;
mod store;
mod students;
mod subjects;
mod teachers;

pub use config::StoreConfig;
pub use store::SqliteStore;

use thiserror::Error;

use crate::models::{Student, Subject, Teacher};

/// Failures surfaced by the record store. The view-model reduces these to a
/// success flag plus a user-facing message, but keeping the kinds distinct
/// means "no such row" and "constraint violated" read differently in the UI.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A mutation was attempted while no connection is open.
    #[error("the database is not connected")]
    NotConnected,
    /// A delete or lookup matched zero rows.
    #[error("no matching record")]
    NotFound,
    /// The database rejected the statement with a CHECK or NOT NULL violation.
    #[error("{0}")]
    Constraint(String),
    /// Any other SQLite failure.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Could not create the data directory for an on-disk database.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// The store surface the view-model programs against. `SqliteStore` is the
/// production implementation; tests substitute a recording stub to verify
/// that rejected input never reaches the store.
pub trait RecordStore {
    /// Open the configured database and make sure the three tables exist.
    /// No retry is attempted on failure; the handle stays closed.
    fn connect(&mut self) -> Result<(), StoreError>;

    /// Whether a live connection is currently held. Pure observation.
    fn is_connected(&self) -> bool;

    /// Every teacher in id order. Empty when the table is empty or the store
    /// is unreachable; this layer never reports read errors.
    fn all_teachers(&self) -> Vec<Teacher>;

    /// Insert a teacher and echo the hydrated row with its assigned id.
    fn add_teacher(&mut self, full_name: &str, department: &str) -> Result<Teacher, StoreError>;

    /// Delete one teacher. `NotFound` when the id matches no row.
    fn delete_teacher(&mut self, id: i64) -> Result<(), StoreError>;

    /// Look up a single teacher by id.
    fn teacher_by_id(&self, id: i64) -> Option<Teacher>;

    /// Every student in id order, with the same empty-on-unreachable contract
    /// as `all_teachers`.
    fn all_students(&self) -> Vec<Student>;

    /// Insert a student and echo the hydrated row. The grade CHECK constraint
    /// surfaces as `Constraint` if an out-of-range value slips past the
    /// view-model's validation.
    fn add_student(&mut self, full_name: &str, grade: i64) -> Result<Student, StoreError>;

    /// Delete one student. `NotFound` when the id matches no row.
    fn delete_student(&mut self, id: i64) -> Result<(), StoreError>;

    /// Look up a single student by id.
    fn student_by_id(&self, id: i64) -> Option<Student>;

    /// Every subject in id order.
    fn all_subjects(&self) -> Vec<Subject>;

    /// Insert a subject and echo the hydrated row.
    fn add_subject(&mut self, name: &str) -> Result<Subject, StoreError>;

    /// Delete one subject. `NotFound` when the id matches no row.
    fn delete_subject(&mut self, id: i64) -> Result<(), StoreError>;

    /// Look up a single subject by id.
    fn subject_by_id(&self, id: i64) -> Option<Subject>;

    /// Sum of three independent COUNT queries. Not transactionally consistent
    /// across the three tables, which is acceptable for a single-user tool.
    fn total_records(&self) -> i64;
}
