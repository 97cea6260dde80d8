use crate::document::Document;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read tracker log {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed tracker log at line {line}, column {column}")]
    Malformed {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for LoadError {
    fn from(source: serde_json::Error) -> Self {
        LoadError::Malformed {
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

/// Parse a tracker log from its JSON text.
///
/// Only the shape of the document is checked. Frame ranges and ordering are
/// trusted as the tracker wrote them.
pub fn parse(input: &str) -> Result<Document, LoadError> {
    let document: Document = serde_json::from_str(input)?;
    Ok(document)
}

/// Read and parse a tracker log from disk.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Document, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse(&content)?;

    tracing::debug!(
        path = %path.display(),
        trackers = document.trackers.len(),
        samples = document.sample_count(),
        "loaded tracker log"
    );

    Ok(document)
}
