use std::fmt;
use std::path::Path;

use screenplay::project::ScreenplayDoc;

/// Errors from reading or writing project documents on disk.
#[derive(Debug)]
pub enum StoreError {
    Io(String),
    Format(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "I/O error: {}", msg),
            StoreError::Format(msg) => write!(f, "document format error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read a stored project document from a JSON file.
pub fn load_project(path: &Path) -> Result<ScreenplayDoc, StoreError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| StoreError::Io(format!("cannot read '{}': {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| StoreError::Format(format!("'{}': {}", path.display(), e)))
}

/// Write a project document to a JSON file, pretty-printed.
pub fn save_project(path: &Path, doc: &ScreenplayDoc) -> Result<(), StoreError> {
    let mut raw = serde_json::to_string_pretty(doc)
        .map_err(|e| StoreError::Format(e.to_string()))?;
    raw.push('\n');
    std::fs::write(path, raw)
        .map_err(|e| StoreError::Io(format!("cannot write '{}': {}", path.display(), e)))
}
