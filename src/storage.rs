//! Persistence and file interchange for range collections.
//!
//! Both the store file and export files are a JSON array of [`Range`]
//! records.

use crate::range::{now_ms, Range};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum StorageError {
    #[error("reading or writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a range file: {0}")]
    InvalidFormat(String),
    #[error("encoding ranges: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StorageError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }
}

/// Somewhere the range collection lives between sessions.
pub trait RangeStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<Range>>, StorageError>;
    fn save(&self, ranges: &[Range]) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Serialize ranges as a pretty-printed JSON array.
pub fn export_json(ranges: &[Range]) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(ranges)?)
}

/// Parse a JSON array of ranges.
///
/// ```
/// use poker_ranges::storage::import_json;
///
/// let ranges = import_json(r#"[{"id":"a","name":"A","hands":["AA","AA","KK"],
///     "isPreset":false,"isFavorite":true,"createdAt":1,"updatedAt":2}]"#).unwrap();
/// assert_eq!(ranges[0].hands.len(), 2);
/// assert!(import_json("{}").is_err());
/// ```
pub fn import_json(text: &str) -> Result<Vec<Range>, StorageError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| StorageError::InvalidFormat(e.to_string()))?;
    if !value.is_array() {
        return Err(StorageError::InvalidFormat("expected a JSON array".to_string()));
    }
    serde_json::from_value(value).map_err(|e| StorageError::InvalidFormat(e.to_string()))
}

/// Write `poker-ranges-<ms>.json` into `dir` and return its path.
pub fn export_to_dir(dir: &Path, ranges: &[Range]) -> Result<PathBuf, StorageError> {
    let path = dir.join(format!("poker-ranges-{}.json", now_ms()));
    fs::write(&path, export_json(ranges)?).map_err(|e| StorageError::io(&path, e))?;
    info!(path = %path.display(), count = ranges.len(), "ranges exported");
    Ok(path)
}

pub fn import_from_path(path: &Path) -> Result<Vec<Range>, StorageError> {
    let text = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    let ranges = import_json(&text)?;
    info!(path = %path.display(), count = ranges.len(), "ranges read from file");
    Ok(ranges)
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RangeStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Range>>, StorageError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved ranges");
            return Ok(None);
        }
        import_from_path(&self.path).map(Some)
    }

    fn save(&self, ranges: &[Range]) -> Result<(), StorageError> {
        let text = export_json(ranges)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::io(&self.path, e))?;
        debug!(path = %self.path.display(), count = ranges.len(), "ranges saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(&self.path, e)),
        }
    }
}

/// In-memory store, mostly for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RangeStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Range>>, StorageError> {
        let guard = self.data.lock().unwrap_or_else(|p| p.into_inner());
        guard.as_deref().map(import_json).transpose()
    }

    fn save(&self, ranges: &[Range]) -> Result<(), StorageError> {
        let text = export_json(ranges)?;
        *self.data.lock().unwrap_or_else(|p| p.into_inner()) = Some(text);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.data.lock().unwrap_or_else(|p| p.into_inner()) = None;
        Ok(())
    }
}
