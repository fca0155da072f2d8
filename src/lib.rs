//! Core library surface for the University Records Manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the integration tests can reuse the same pieces:
//! the SQLite-backed record store, the three entity models, the view-model
//! that mediates between them, and the Ratatui front-end.
pub mod db;
pub mod models;
pub mod ui;
pub mod viewmodel;

/// Convenience re-exports for the persistence layer. `main.rs` uses these to
/// build the store around an injected location.
pub use db::{RecordStore, SqliteStore, StoreConfig, StoreError};

/// The three domain types that other layers render and delete by id.
pub use models::{Student, Subject, Teacher};

/// The mediation layer and its outward notification events.
pub use viewmodel::{UiEvent, UniversityViewModel};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
