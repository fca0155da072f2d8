//! Mediation layer between the record store and the TUI. The view-model keeps
//! a display-string projection of each table, validates input the database
//! schema cannot (empty fields), and re-reads everything after any successful
//! mutation so the cached lists never drift from the store.

use crate::db::RecordStore;

/// Outward notifications for the UI, drained once per frame. They are
/// fire-and-forget: the view-model never retries or rolls anything back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// All cached projections were replaced together; re-read everything.
    DataChanged,
    /// The connection attempt finished with the given outcome.
    ConnectionChanged(bool),
    /// Something failed; carries a human-readable message.
    Error(String),
}

/// Caches one display-ready list per table and mediates every user action
/// through a validate, delegate, refresh-on-success sequence. Generic over
/// the store so tests can substitute a recording stub.
pub struct UniversityViewModel<S: RecordStore> {
    store: S,
    teachers: Vec<String>,
    students: Vec<String>,
    subjects: Vec<String>,
    events: Vec<UiEvent>,
}

impl<S: RecordStore> UniversityViewModel<S> {
    /// Wrap a store without touching it. The caller decides when to connect,
    /// which keeps startup two-phase: build the UI first, attach after.
    pub fn new(store: S) -> Self {
        Self {
            store,
            teachers: Vec::new(),
            students: Vec::new(),
            subjects: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Attempt the store connection once. A success loads all three lists;
    /// a failure leaves the view-model usable but empty.
    pub fn connect(&mut self) -> bool {
        match self.store.connect() {
            Ok(()) => {
                self.events.push(UiEvent::ConnectionChanged(true));
                self.refresh();
                true
            }
            Err(err) => {
                self.events.push(UiEvent::ConnectionChanged(false));
                self.events
                    .push(UiEvent::Error(format!("Could not connect: {err}")));
                false
            }
        }
    }

    /// Whether the underlying store holds a live connection.
    pub fn is_connected(&self) -> bool {
        self.store.is_connected()
    }

    /// Cached teacher display strings, id-ascending.
    pub fn teachers(&self) -> &[String] {
        &self.teachers
    }

    /// Cached student display strings, id-ascending.
    pub fn students(&self) -> &[String] {
        &self.students
    }

    /// Cached subject display strings, id-ascending.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Total cached records across the three lists. Recomputed from the
    /// projections rather than tracked incrementally.
    pub fn total_records(&self) -> usize {
        self.teachers.len() + self.students.len() + self.subjects.len()
    }

    /// Validate and add a teacher. Empty fields are rejected before the store
    /// is consulted at all.
    pub fn add_teacher(&mut self, name: &str, department: &str) -> bool {
        if name.trim().is_empty() || department.trim().is_empty() {
            self.report_error("Name and department must not be empty");
            return false;
        }
        match self.store.add_teacher(name, department) {
            Ok(_) => {
                self.refresh();
                true
            }
            Err(err) => {
                self.report_error(&format!("Could not add teacher: {err}"));
                false
            }
        }
    }

    /// Validate and add a student. The grade range check duplicates the
    /// schema constraint on purpose so bad input never costs a round trip.
    pub fn add_student(&mut self, name: &str, grade: i64) -> bool {
        if name.trim().is_empty() {
            self.report_error("Name must not be empty");
            return false;
        }
        if !(1..=5).contains(&grade) {
            self.report_error("Grade must be between 1 and 5");
            return false;
        }
        match self.store.add_student(name, grade) {
            Ok(_) => {
                self.refresh();
                true
            }
            Err(err) => {
                self.report_error(&format!("Could not add student: {err}"));
                false
            }
        }
    }

    /// Validate and add a subject.
    pub fn add_subject(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            self.report_error("Subject name must not be empty");
            return false;
        }
        match self.store.add_subject(name) {
            Ok(_) => {
                self.refresh();
                true
            }
            Err(err) => {
                self.report_error(&format!("Could not add subject: {err}"));
                false
            }
        }
    }

    /// Delete a teacher by id. No local validation is needed for deletes; a
    /// missing id surfaces as a store failure.
    pub fn delete_teacher(&mut self, id: i64) -> bool {
        match self.store.delete_teacher(id) {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(err) => {
                self.report_error(&format!("Could not delete teacher: {err}"));
                false
            }
        }
    }

    /// Delete a student by id.
    pub fn delete_student(&mut self, id: i64) -> bool {
        match self.store.delete_student(id) {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(err) => {
                self.report_error(&format!("Could not delete student: {err}"));
                false
            }
        }
    }

    /// Delete a subject by id.
    pub fn delete_subject(&mut self, id: i64) -> bool {
        match self.store.delete_subject(id) {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(err) => {
                self.report_error(&format!("Could not delete subject: {err}"));
                false
            }
        }
    }

    /// Re-read all three tables and replace the cached projections together.
    /// A no-op while disconnected; one `DataChanged` event covers the whole
    /// batch so observers see a single atomic update.
    pub fn refresh(&mut self) {
        if !self.store.is_connected() {
            return;
        }
        self.teachers = self
            .store
            .all_teachers()
            .iter()
            .map(ToString::to_string)
            .collect();
        self.students = self
            .store
            .all_students()
            .iter()
            .map(ToString::to_string)
            .collect();
        self.subjects = self
            .store
            .all_subjects()
            .iter()
            .map(ToString::to_string)
            .collect();
        self.events.push(UiEvent::DataChanged);
    }

    /// Hand all pending notifications to the UI, clearing the queue.
    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }

    fn report_error(&mut self, message: &str) {
        self.events.push(UiEvent::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{SqliteStore, StoreConfig, StoreError};
    use crate::models::{Student, Subject, Teacher};

    /// Store stand-in that records how often each mutation was attempted so
    /// tests can prove validation failures never reach the store.
    #[derive(Default)]
    struct RecordingStub {
        connected: bool,
        add_calls: usize,
        delete_calls: usize,
    }

    impl RecordStore for RecordingStub {
        fn connect(&mut self) -> Result<(), StoreError> {
            self.connected = true;
            Ok(())
        }

        fn is_connected(&self) -> bool {
            self.connected
        }

        fn all_teachers(&self) -> Vec<Teacher> {
            Vec::new()
        }

        fn add_teacher(&mut self, full_name: &str, department: &str) -> Result<Teacher, StoreError> {
            self.add_calls += 1;
            Ok(Teacher {
                id: 1,
                full_name: full_name.to_string(),
                department: department.to_string(),
            })
        }

        fn delete_teacher(&mut self, _id: i64) -> Result<(), StoreError> {
            self.delete_calls += 1;
            Err(StoreError::NotFound)
        }

        fn teacher_by_id(&self, _id: i64) -> Option<Teacher> {
            None
        }

        fn all_students(&self) -> Vec<Student> {
            Vec::new()
        }

        fn add_student(&mut self, full_name: &str, grade: i64) -> Result<Student, StoreError> {
            self.add_calls += 1;
            Ok(Student {
                id: 1,
                full_name: full_name.to_string(),
                grade,
            })
        }

        fn delete_student(&mut self, _id: i64) -> Result<(), StoreError> {
            self.delete_calls += 1;
            Err(StoreError::NotFound)
        }

        fn student_by_id(&self, _id: i64) -> Option<Student> {
            None
        }

        fn all_subjects(&self) -> Vec<Subject> {
            Vec::new()
        }

        fn add_subject(&mut self, name: &str) -> Result<Subject, StoreError> {
            self.add_calls += 1;
            Ok(Subject {
                id: 1,
                name: name.to_string(),
            })
        }

        fn delete_subject(&mut self, _id: i64) -> Result<(), StoreError> {
            self.delete_calls += 1;
            Err(StoreError::NotFound)
        }

        fn subject_by_id(&self, _id: i64) -> Option<Subject> {
            None
        }

        fn total_records(&self) -> i64 {
            0
        }
    }

    fn connected_vm() -> UniversityViewModel<SqliteStore> {
        let mut vm = UniversityViewModel::new(SqliteStore::new(StoreConfig::in_memory()));
        assert!(vm.connect());
        vm.drain_events();
        vm
    }

    #[test]
    fn empty_fields_never_reach_the_store() {
        let mut vm = UniversityViewModel::new(RecordingStub::default());
        vm.connect();

        assert!(!vm.add_teacher("", "Mathematics"));
        assert!(!vm.add_teacher("Ada Lovelace", ""));
        assert!(!vm.add_student("", 3));
        assert!(!vm.add_subject("   "));
        assert_eq!(vm.store.add_calls, 0);

        let events = vm.drain_events();
        assert!(events
            .iter()
            .filter(|event| matches!(event, UiEvent::Error(_)))
            .count()
            >= 4);
    }

    #[test]
    fn out_of_range_grade_never_reaches_the_store() {
        let mut vm = UniversityViewModel::new(RecordingStub::default());
        vm.connect();

        assert!(!vm.add_student("Ivan Petrov", 0));
        assert!(!vm.add_student("Ivan Petrov", 6));
        assert_eq!(vm.store.add_calls, 0);
    }

    #[test]
    fn successful_add_refreshes_lists_and_count() {
        let mut vm = connected_vm();
        assert!(vm.add_teacher("Ada Lovelace", "Mathematics"));

        assert_eq!(vm.total_records(), 1);
        let entry = &vm.teachers()[0];
        assert!(entry.contains("Ada Lovelace"));
        assert!(entry.contains("Mathematics"));
    }

    #[test]
    fn failed_add_leaves_lists_unchanged() {
        let mut vm = connected_vm();
        assert!(vm.add_student("Ivan Petrov", 4));
        assert_eq!(vm.students().len(), 1);

        assert!(!vm.add_student("Bad Grade", 9));
        assert_eq!(vm.students().len(), 1);
        assert_eq!(vm.total_records(), 1);
    }

    #[test]
    fn delete_of_missing_id_fails_and_changes_nothing() {
        let mut vm = connected_vm();
        assert!(vm.add_subject("Algorithms"));
        let before = vm.total_records();

        assert!(!vm.delete_subject(999));
        assert!(!vm.delete_teacher(999));
        assert!(!vm.delete_student(999));
        assert_eq!(vm.total_records(), before);
    }

    #[test]
    fn delete_of_existing_id_removes_exactly_one_entry() {
        let mut vm = connected_vm();
        assert!(vm.add_subject("Algorithms"));
        assert!(vm.add_subject("Databases"));
        assert_eq!(vm.total_records(), 2);

        // Display strings lead with the id, so the first entry's id is 1.
        assert!(vm.delete_subject(1));
        assert_eq!(vm.total_records(), 1);
        assert!(vm.subjects()[0].contains("Databases"));
    }

    #[test]
    fn refresh_without_connection_is_a_no_op() {
        let mut vm = UniversityViewModel::new(SqliteStore::new(StoreConfig::in_memory()));
        vm.refresh();
        assert!(vm.drain_events().is_empty());
        assert_eq!(vm.total_records(), 0);
    }

    #[test]
    fn refresh_emits_one_batched_data_changed_event() {
        let mut vm = connected_vm();
        vm.refresh();
        let events = vm.drain_events();
        assert_eq!(events, vec![UiEvent::DataChanged]);
    }

    #[test]
    fn connection_outcome_is_reported_as_an_event() {
        let mut vm = UniversityViewModel::new(SqliteStore::new(StoreConfig::in_memory()));
        assert!(vm.connect());
        let events = vm.drain_events();
        assert_eq!(events[0], UiEvent::ConnectionChanged(true));
        assert!(events.contains(&UiEvent::DataChanged));
    }
}
