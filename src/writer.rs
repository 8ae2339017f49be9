//! Output destinations for an exported session.
//!
//! Each destination implements [`ChunkWriter`]; the orchestrator hands it
//! the decoded document and does not care where the text ends up. Adding a
//! new output format means adding a variant here, nothing else changes.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use rusqlite::Connection;
use serde::{Deserialize, Deserializer};

use crate::error::ExportError;
use crate::model::Root;
use crate::process::process_chunks;

/// A destination that can persist the visible chunks of a session.
pub trait ChunkWriter {
    fn write(&self, root: &Root) -> Result<(), ExportError>;
}

/// Writes the joined chunk text as the complete contents of a file,
/// create-or-truncate. A failed write may leave a truncated file behind;
/// the export is not resumable, callers retry the whole run.
pub struct TextWriter {
    pub path: PathBuf,
}

impl ChunkWriter for TextWriter {
    fn write(&self, root: &Root) -> Result<(), ExportError> {
        fs::write(&self.path, process_chunks(root)).map_err(|source| ExportError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Inserts surviving chunks as rows of a `chunk_records` table, one text
/// per row with an auto-assigned id.
pub struct SqliteWriter {
    pub path: PathBuf,
}

const ENSURE_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS chunk_records (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL
)";

impl ChunkWriter for SqliteWriter {
    fn write(&self, root: &Root) -> Result<(), ExportError> {
        let mut conn = Connection::open(&self.path).map_err(|source| ExportError::StoreOpen {
            path: self.path.clone(),
            source,
        })?;

        // Explicit schema step, idempotent on a pre-existing database.
        conn.execute_batch(ENSURE_SCHEMA)
            .map_err(|source| ExportError::Schema { source })?;

        let texts: Vec<&str> = root.surviving_chunks().map(|c| c.text.as_str()).collect();
        if texts.is_empty() {
            return Ok(());
        }

        // One transaction for the whole batch: ids come out monotonically
        // increasing in source order, and a failure commits nothing.
        let tx = conn
            .transaction()
            .map_err(|source| ExportError::Insert { source })?;
        {
            let mut stmt = tx
                .prepare("INSERT INTO chunk_records (text) VALUES (?1)")
                .map_err(|source| ExportError::Insert { source })?;
            for text in &texts {
                stmt.execute([*text])
                    .map_err(|source| ExportError::Insert { source })?;
            }
        }
        tx.commit().map_err(|source| ExportError::Insert { source })
    }
}

/// Selects which [`ChunkWriter`] an export run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Txt,
    Sqlite,
}

impl OutputFormat {
    pub fn writer(self, path: PathBuf) -> Box<dyn ChunkWriter> {
        match self {
            OutputFormat::Txt => Box::new(TextWriter { path }),
            OutputFormat::Sqlite => Box::new(SqliteWriter { path }),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(OutputFormat::Txt),
            "sqlite" | "db" => Ok(OutputFormat::Sqlite),
            _ => Err(ExportError::UnsupportedFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Txt => write!(f, "txt"),
            OutputFormat::Sqlite => write!(f, "sqlite"),
        }
    }
}

// Config files go through the same parser as the CLI flag.
impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
