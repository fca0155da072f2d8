//! Injected database location. The original tool hard-coded its connection
//! parameters; here the caller decides where the SQLite file lives, and tests
//! point the store at an in-memory database instead.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;
use rusqlite::Connection;

use super::StoreError;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".university-manager";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "university.sqlite";

/// Where the store should open its database. Constructed once at startup and
/// handed to `SqliteStore::new`; the store itself never consults globals.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    location: Location,
}

#[derive(Debug, Clone)]
enum Location {
    OnDisk(PathBuf),
    InMemory,
}

impl StoreConfig {
    /// Resolve the default on-disk location inside the user's home directory.
    pub fn default_location() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        let path = base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME);
        Ok(Self::at(path))
    }

    /// Use an explicit database file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::OnDisk(path.into()),
        }
    }

    /// Use a private in-memory database. Intended for tests, where each store
    /// gets a fresh empty schema.
    pub fn in_memory() -> Self {
        Self {
            location: Location::InMemory,
        }
    }

    /// Open a connection at the configured location, creating the parent data
    /// directory first for on-disk databases.
    pub(crate) fn open(&self) -> Result<Connection, StoreError> {
        match &self.location {
            Location::OnDisk(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                Ok(Connection::open(path)?)
            }
            Location::InMemory => Ok(Connection::open_in_memory()?),
        }
    }
}
