//! JSON file storage implementation
//!
//! Persists the whole catalog as one pretty-printed JSON array. Writes go to a
//! sibling temp file that is then renamed over the target, so readers never
//! observe a half-written catalog.

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;

use shared::{ComponentId, MenuItem, component_debug};
use crate::error::{CatalogError, CatalogResult};
use crate::traits::MenuStorage;

/// File-backed menu storage
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "catalog.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn storage_error(&self, operation: &'static str, source: std::io::Error) -> CatalogError {
        CatalogError::Storage {
            operation,
            path: self.path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl MenuStorage for JsonFileStorage {
    async fn load(&self) -> CatalogResult<Vec<MenuItem>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.storage_error("read", e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| CatalogError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })
    }

    async fn save(&self, items: &[MenuItem]) -> CatalogResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error("create directory", e))?;
        }

        let content = serde_json::to_string_pretty(items)
            .map_err(|e| self.storage_error("encode", std::io::Error::other(e)))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, content)
            .await
            .map_err(|e| self.storage_error("write", e))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.storage_error("replace", e))?;

        component_debug!(ComponentId::Catalog, "💾 Wrote {} menu items to {}", items.len(), self.path.display());
        Ok(())
    }
}
