//! # aistudio-chat-export
//!
//! A CLI tool that exports [Google AI Studio](https://aistudio.google.com)
//! prompt sessions to a plain-text document or a SQLite database.
//!
//! ## What it does
//!
//! AI Studio's "Download" button produces a JSON file describing the session
//! as a sequence of chunks, where each chunk is either visible text or the
//! model's internal reasoning ("thought"). This tool reads that file, drops
//! the thoughts and empty chunks, and writes the remaining text in its
//! original order — either joined into one text file with `---` separators,
//! or as one row per chunk in a `chunk_records` SQLite table.
//!
//! The input file is never modified.
//!
//! ## Usage
//!
//! ```sh
//! # Export to a text file
//! aistudio-chat-export export session.json session.txt
//!
//! # Export to SQLite instead
//! aistudio-chat-export export session.json chunks.db --format sqlite
//! ```
//!
//! A default format can be persisted in
//! `~/.config/aistudio-chat-export/config.toml`.

pub mod error;
pub mod export;
pub mod model;
pub mod process;
pub mod writer;

pub use error::ExportError;
pub use export::export_chunks;
pub use model::{Chunk, ChunkedPrompt, Root};
pub use process::{CHUNK_SEPARATOR, process_chunks};
pub use writer::{ChunkWriter, OutputFormat, SqliteWriter, TextWriter};
