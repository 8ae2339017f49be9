use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong during an export.
///
/// The binary reports these through eyre; library consumers can match on
/// the variant to tell input problems from destination problems. The
/// underlying cause is always attached.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The input file could not be read.
    #[error("failed to read input file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input bytes are not a session document of the expected shape.
    #[error("failed to parse session JSON")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The text destination could not be written.
    #[error("failed to write output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The SQLite destination could not be opened or created.
    #[error("failed to open database {}", path.display())]
    StoreOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The chunk table could not be created.
    #[error("failed to ensure database schema")]
    Schema {
        #[source]
        source: rusqlite::Error,
    },

    /// The batch insert failed.
    #[error("failed to insert chunks")]
    Insert {
        #[source]
        source: rusqlite::Error,
    },

    /// An output format name that is neither txt nor sqlite (nor an alias).
    #[error("unsupported format: {value} (supported: txt, sqlite)")]
    UnsupportedFormat { value: String },
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path() {
        let err = ExportError::Read {
            path: PathBuf::from("/tmp/session.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.to_string().contains("/tmp/session.json"));
    }

    #[test]
    fn unsupported_format_names_value() {
        let err = ExportError::UnsupportedFormat {
            value: "yaml".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported format: yaml (supported: txt, sqlite)"
        );
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error as _;
        let err = ExportError::Parse {
            source: serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
        };
        assert!(err.source().is_some());
    }
}
