//! JSON file visit source
//!
//! Reads the array of visit records returned by the tracker backend's
//! visits endpoint, saved to disk.

use crate::domain::Visit;
use crate::error::SourceError;
use crate::source::traits::VisitSource;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Visit source backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode a visit array from a JSON string
    pub fn parse(content: &str) -> Result<Vec<Visit>, SourceError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl VisitSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Visit>, SourceError> {
        let path_str = self.path.display().to_string();
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::FileNotFound(path_str.clone()),
            _ => SourceError::Read {
                path: path_str.clone(),
                source: e,
            },
        })?;

        if content.trim().is_empty() {
            return Err(SourceError::Empty(path_str));
        }

        let visits = Self::parse(&content)?;
        log::info!("Loaded {} visits from {}", visits.len(), path_str);
        Ok(visits)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
