//! Type definitions for the AI Studio prompt-session export format.
//!
//! A session download is a single JSON document:
//!
//! ```json
//! {
//!   "chunkedPrompt": {
//!     "chunks": [
//!       { "text": "...", "isThought": false },
//!       ...
//!     ]
//!   }
//! }
//! ```
//!
//! Every field is optional on the wire; absent fields decode to their
//! defaults so that partial documents still export (as nothing). Unknown
//! fields are ignored.

use serde::Deserialize;

use crate::error::ExportError;

/// One unit of the conversation, either visible text or internal model
/// reasoning ("thought"). Position in the enclosing sequence is the only
/// identity a chunk has.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_thought: bool,
}

/// The ordered chunk sequence. Source order is narrative order and is
/// preserved in every output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChunkedPrompt {
    #[serde(default)]
    pub chunks: Vec<Chunk>,
}

/// Top level of the session document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    #[serde(default)]
    pub chunked_prompt: ChunkedPrompt,
}

impl Root {
    /// Decode a raw session document.
    ///
    /// Fails when the bytes are not valid JSON or a recognized field has
    /// the wrong type; missing fields are fine.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        serde_json::from_slice(bytes).map_err(|source| ExportError::Parse { source })
    }

    /// Chunks that make it into any output: not a thought, text non-empty.
    /// Whitespace-only text counts as non-empty.
    pub fn surviving_chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunked_prompt
            .chunks
            .iter()
            .filter(|c| !c.is_thought && !c.text.is_empty())
    }
}
