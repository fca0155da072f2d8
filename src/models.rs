//! Domain models that mirror the SQLite schema and get passed throughout the
//! TUI. The intent is that these types stay light-weight data holders so other
//! layers can focus on presentation and persistence logic. Every instance is a
//! snapshot of one database row; the view-model never mutates one in place, it
//! replaces its cached projection wholesale on each refresh.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A member of the teaching staff. Rows come straight out of the `teachers`
/// table; the `id` is assigned by the store and never changes afterwards.
pub struct Teacher {
    /// Primary key from the database. Kept around because delete flows bubble
    /// the id back to the persistence layer.
    pub id: i64,
    /// Full name shown in lists.
    pub full_name: String,
    /// Department the teacher belongs to.
    pub department: String,
}

impl fmt::Display for Teacher {
    /// Canonical `"{id}. {name} ({department})"` rendering. Display is
    /// implemented so the type plays nicely with Ratatui widgets that consume
    /// strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} ({})", self.id, self.full_name, self.department)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An enrolled student. The `grade` is constrained to 1..=5 by a CHECK
/// constraint at the storage layer and validated again by the view-model
/// before any insert is attempted.
pub struct Student {
    /// Primary key from the SQLite store.
    pub id: i64,
    /// Full name shown in lists.
    pub full_name: String,
    /// Current grade on the 1..=5 scale.
    pub grade: i64,
}

impl fmt::Display for Student {
    /// Canonical `"{id}. {name} (Оценка: {grade})"` rendering. The grade label
    /// is domain vocabulary carried over verbatim from the source data.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} (Оценка: {})", self.id, self.full_name, self.grade)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A subject taught at the university. The smallest of the three records.
pub struct Subject {
    /// Primary key from the SQLite store.
    pub id: i64,
    /// Subject name shown in lists.
    pub name: String,
}

impl fmt::Display for Subject {
    /// Canonical `"{id}. {name}"` rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_display_includes_id_name_and_department() {
        let teacher = Teacher {
            id: 3,
            full_name: "Ada Lovelace".to_string(),
            department: "Mathematics".to_string(),
        };
        assert_eq!(teacher.to_string(), "3. Ada Lovelace (Mathematics)");
    }

    #[test]
    fn student_display_keeps_grade_label() {
        let student = Student {
            id: 7,
            full_name: "Ivan Petrov".to_string(),
            grade: 5,
        };
        assert_eq!(student.to_string(), "7. Ivan Petrov (Оценка: 5)");
    }

    #[test]
    fn subject_display_is_id_dot_name() {
        let subject = Subject {
            id: 12,
            name: "Algorithms".to_string(),
        };
        assert_eq!(subject.to_string(), "12. Algorithms");
    }
}
