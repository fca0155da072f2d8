//! Binary entry point that glues the SQLite-backed record store to the TUI.
//! Startup is deliberately two-phase: everything here is constructed in a
//! disconnected state, and the terminal loop performs the actual connection
//! attempt once the screen is up.
use university_manager::{run_app, App, SqliteStore, StoreConfig, UniversityViewModel};

/// Resolve the database location, build the disconnected view-model, and
/// launch the Ratatui event loop. Returning a `Result` bubbles up fatal
/// initialization problems (for example no resolvable home directory) to the
/// terminal instead of crashing silently.
fn main() -> anyhow::Result<()> {
    let config = StoreConfig::default_location()?;
    let store = SqliteStore::new(config);
    let vm = UniversityViewModel::new(store);

    let mut app = App::new(vm);
    run_app(&mut app)
}
