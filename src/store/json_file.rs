// ABOUTME: DocumentStore backend persisting the pantry document as a JSON file
// ABOUTME: Writes go to a sibling temporary file that is renamed over the target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{DocumentStore, PantryDocument};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// JSON file backend
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Backend over the file at `path`; the file is created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("db.json"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    fn backend_name(&self) -> &'static str {
        "json-file"
    }

    async fn load(&self) -> AppResult<PantryDocument> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Document not found, starting empty");
                return Ok(PantryDocument::default());
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                ))
                .with_source(e))
            }
        };

        if contents.trim().is_empty() {
            warn!(path = %self.path.display(), "Document is empty, starting empty");
            return Ok(PantryDocument::default());
        }

        serde_json::from_str(&contents).map_err(|e| {
            AppError::storage(format!("Failed to parse {}: {e}", self.path.display()))
                .with_source(e)
        })
    }

    async fn save(&self, document: &PantryDocument) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_vec_pretty(document)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, contents).await?;
        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to replace {}: {e}",
                self.path.display()
            ))
            .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_sibling() {
        let store = JsonFileStore::new("/var/data/db.json");
        assert_eq!(store.temp_path(), PathBuf::from("/var/data/db.json.tmp"));
    }
}
