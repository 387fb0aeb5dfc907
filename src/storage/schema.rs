//! Database schema and connection management

use anyhow::{anyhow, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for character data
pub struct CharacterDatabase {
    pub(crate) conn: Connection,
}

impl CharacterDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open the database at the platform-default data directory
    pub fn open_default() -> Result<Self> {
        Self::new(&Self::database_path()?)
    }

    /// In-memory database, used by tests and ad-hoc runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the default path to the database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| anyhow!("could not determine data directory"))?;
        Ok(data_dir.join("starwars-admin").join("characters.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS characters (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                height REAL,
                mass REAL,
                hair_color TEXT,
                skin_color TEXT,
                eye_color TEXT,
                birth_year TEXT,
                gender TEXT
            )",
            [],
        )?;

        Ok(())
    }
}
