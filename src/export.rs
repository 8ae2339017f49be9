use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::model::Root;
use crate::writer::ChunkWriter;

/// Run one export: read the session file, decode it, hand it to the writer.
///
/// Every failure is terminal for the invocation; nothing is retried and
/// writer errors propagate unchanged.
pub fn export_chunks(input: &Path, writer: &dyn ChunkWriter) -> Result<(), ExportError> {
    let bytes = fs::read(input).map_err(|source| ExportError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let root = Root::from_json_bytes(&bytes)?;

    writer.write(&root)
}
