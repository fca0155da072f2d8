//! Ratatui front-end split across logical submodules: terminal lifecycle,
//! application state, input forms, and rendering helpers.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
