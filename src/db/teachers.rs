use rusqlite::{params, Connection, OptionalExtension};

use crate::models::Teacher;

use super::store::{map_constraint, SqliteStore};
use super::StoreError;

impl SqliteStore {
    /// Retrieve every teacher in id order. A deterministic ordering keeps the
    /// cached list stable across refreshes; an unreachable store reads as an
    /// empty table at this layer.
    pub fn all_teachers(&self) -> Vec<Teacher> {
        let Some(conn) = self.conn() else {
            return Vec::new();
        };
        query_teachers(conn).unwrap_or_default()
    }

    /// Insert a new teacher row, returning the hydrated struct so the caller
    /// can observe the assigned id without re-querying.
    pub fn add_teacher(&self, full_name: &str, department: &str) -> Result<Teacher, StoreError> {
        let conn = self.conn_or_err()?;
        conn.execute(
            "INSERT INTO teachers (full_name, department) VALUES (?1, ?2)",
            params![full_name, department],
        )
        .map_err(|err| map_constraint(err, "Teacher fields must not be null"))?;

        Ok(Teacher {
            id: conn.last_insert_rowid(),
            full_name: full_name.to_string(),
            department: department.to_string(),
        })
    }

    /// Remove a teacher row. Deleting an id that matches nothing is a
    /// `NotFound` failure, not a silent no-op.
    pub fn delete_teacher(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.conn_or_err()?;
        let deleted = conn.execute("DELETE FROM teachers WHERE id = ?1", params![id])?;
        if deleted == 0 {
            Err(StoreError::NotFound)
        } else {
            Ok(())
        }
    }

    /// Look up a single teacher. `None` covers both "no such row" and an
    /// unreachable store.
    pub fn teacher_by_id(&self, id: i64) -> Option<Teacher> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT id, full_name, department FROM teachers WHERE id = ?1",
            params![id],
            teacher_from_row,
        )
        .optional()
        .ok()
        .flatten()
    }
}

fn query_teachers(conn: &Connection) -> rusqlite::Result<Vec<Teacher>> {
    let mut stmt = conn.prepare("SELECT id, full_name, department FROM teachers ORDER BY id")?;
    let teachers = stmt
        .query_map([], teacher_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(teachers)
}

fn teacher_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Teacher> {
    Ok(Teacher {
        id: row.get(0)?,
        full_name: row.get(1)?,
        department: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use crate::db::{SqliteStore, StoreConfig, StoreError};

    fn connected_store() -> SqliteStore {
        let mut store = SqliteStore::new(StoreConfig::in_memory());
        store.connect().unwrap();
        store
    }

    #[test]
    fn add_then_list_round_trips_fields() {
        let store = connected_store();
        let added = store.add_teacher("Ada Lovelace", "Mathematics").unwrap();
        assert!(added.id > 0);

        let teachers = store.all_teachers();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].full_name, "Ada Lovelace");
        assert_eq!(teachers[0].department, "Mathematics");
        assert_eq!(teachers[0].id, added.id);
    }

    #[test]
    fn listing_is_id_ascending() {
        let store = connected_store();
        store.add_teacher("First Person", "Physics").unwrap();
        store.add_teacher("Second Person", "Chemistry").unwrap();
        store.add_teacher("Third Person", "Biology").unwrap();

        let ids: Vec<i64> = store.all_teachers().iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn delete_missing_teacher_is_not_found() {
        let store = connected_store();
        assert!(matches!(
            store.delete_teacher(999),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn delete_removes_exactly_one_row() {
        let store = connected_store();
        let kept = store.add_teacher("Keep Me", "History").unwrap();
        let gone = store.add_teacher("Remove Me", "Geography").unwrap();

        store.delete_teacher(gone.id).unwrap();
        let teachers = store.all_teachers();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].id, kept.id);
    }

    #[test]
    fn lookup_by_id_finds_row_or_none() {
        let store = connected_store();
        let added = store.add_teacher("Ada Lovelace", "Mathematics").unwrap();
        assert_eq!(store.teacher_by_id(added.id).unwrap(), added);
        assert!(store.teacher_by_id(added.id + 1).is_none());
    }
}
