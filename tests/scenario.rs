//! End-to-end scenarios driven through the public API against an in-memory
//! store, mirroring how the TUI exercises the view-model.

use university_manager::{
    RecordStore, SqliteStore, StoreConfig, UiEvent, UniversityViewModel,
};

fn connected_vm() -> UniversityViewModel<SqliteStore> {
    let mut vm = UniversityViewModel::new(SqliteStore::new(StoreConfig::in_memory()));
    assert!(vm.connect());
    vm.drain_events();
    vm
}

/// Pull the id prefix off a cached display string.
fn id_of(entry: &str) -> i64 {
    entry
        .split_once('.')
        .and_then(|(id, _)| id.trim().parse().ok())
        .unwrap()
}

#[test]
fn subject_lifecycle_from_empty_store() {
    let mut vm = connected_vm();
    assert_eq!(vm.total_records(), 0);

    assert!(vm.add_subject("Algorithms"));
    assert_eq!(vm.total_records(), 1);

    assert!(!vm.add_subject(""));
    assert_eq!(vm.total_records(), 1);

    assert!(!vm.delete_subject(999));
    assert_eq!(vm.total_records(), 1);

    let algorithms_id = id_of(&vm.subjects()[0]);
    assert!(vm.delete_subject(algorithms_id));
    assert_eq!(vm.total_records(), 0);
    assert!(vm.subjects().is_empty());
}

#[test]
fn teacher_add_appears_in_projection_with_both_fields() {
    let mut vm = connected_vm();
    assert!(vm.add_teacher("Ada Lovelace", "Mathematics"));

    assert_eq!(vm.total_records(), 1);
    let entry = &vm.teachers()[0];
    assert!(entry.contains("Ada Lovelace"));
    assert!(entry.contains("Mathematics"));
}

#[test]
fn projections_cover_all_three_tables_after_refresh() {
    let mut vm = connected_vm();
    assert!(vm.add_teacher("Ada Lovelace", "Mathematics"));
    assert!(vm.add_student("Ivan Petrov", 5));
    assert!(vm.add_subject("Algorithms"));

    vm.refresh();
    assert_eq!(vm.teachers().len(), 1);
    assert_eq!(vm.students().len(), 1);
    assert_eq!(vm.subjects().len(), 1);
    assert_eq!(vm.total_records(), 3);
    assert!(vm.students()[0].contains("Оценка: 5"));
}

#[test]
fn mutations_surface_one_data_changed_event_each() {
    let mut vm = connected_vm();
    assert!(vm.add_subject("Algorithms"));
    let events = vm.drain_events();
    assert_eq!(
        events
            .iter()
            .filter(|event| **event == UiEvent::DataChanged)
            .count(),
        1
    );
}

#[test]
fn store_round_trip_preserves_inserted_values() {
    let mut store = SqliteStore::new(StoreConfig::in_memory());
    store.connect().unwrap();

    let added = RecordStore::add_student(&mut store, "Ivan Petrov", 3).unwrap();
    let students = RecordStore::all_students(&store);
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].full_name, "Ivan Petrov");
    assert_eq!(students[0].grade, 3);
    assert_eq!(students[0].id, added.id);
}

#[test]
fn failed_connection_leaves_a_usable_empty_view_model() {
    // Point the store at a path that cannot be created.
    let config = StoreConfig::at("/dev/null/impossible/university.sqlite");
    let mut vm = UniversityViewModel::new(SqliteStore::new(config));

    assert!(!vm.connect());
    assert!(!vm.is_connected());
    assert_eq!(vm.total_records(), 0);
    assert!(!vm.add_subject("Algorithms"));

    let events = vm.drain_events();
    assert!(events.contains(&UiEvent::ConnectionChanged(false)));
    assert!(events
        .iter()
        .any(|event| matches!(event, UiEvent::Error(_))));
}
