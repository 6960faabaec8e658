//! Documentation service - Serves per-module documentation artifacts.
//!
//! SOLID (SRP): Module discovery and documentation lookup only.
//! All request validation lives here, handlers stay thin.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::config::{Config, DOC_ARTIFACT_EXT, MODULE_TYPE_BACKEND, MODULE_TYPE_FRONTEND};
use crate::domain::ModuleType;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Documentation service trait for dependency injection.
///
/// Both operations take the raw module type from the request path and
/// reject anything outside the known set.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DocService: Send + Sync {
    /// List the modules that have documentation for the given type
    async fn list_modules(&self, module_type: &str) -> AppResult<Vec<String>>;

    /// Get the parsed documentation for a single module
    async fn get_module_documentation(
        &self,
        module_id: &str,
        module_type: &str,
    ) -> AppResult<Value>;
}

/// Concrete implementation of DocService backed by on-disk artifacts.
///
/// Artifacts live under `<docs_dir>/<type>/<module>.json`, one file per
/// module, each holding the pre-parsed documentation entries as a JSON array.
pub struct DocCatalog {
    backend_dir: PathBuf,
    frontend_dir: PathBuf,
}

impl DocCatalog {
    /// Create a catalog rooted at the configured docs directory
    pub fn new(config: &Config) -> Self {
        Self {
            backend_dir: config.docs_dir.join(MODULE_TYPE_BACKEND),
            frontend_dir: config.docs_dir.join(MODULE_TYPE_FRONTEND),
        }
    }

    fn root_for(&self, module_type: ModuleType) -> &Path {
        match module_type {
            ModuleType::Backend => &self.backend_dir,
            ModuleType::Frontend => &self.frontend_dir,
        }
    }

    /// Scan the artifact directory for module names, sorted alphabetically.
    /// A missing directory means no modules, not an error.
    async fn discover(&self, module_type: ModuleType) -> AppResult<Vec<String>> {
        let root = self.root_for(module_type);
        let mut entries = match fs::read_dir(root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(AppError::Io(e)),
        };

        let mut modules = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOC_ARTIFACT_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                modules.push(stem.to_string());
            }
        }

        modules.sort();
        Ok(modules)
    }
}

#[async_trait]
impl DocService for DocCatalog {
    async fn list_modules(&self, module_type: &str) -> AppResult<Vec<String>> {
        let module_type: ModuleType = module_type.parse()?;
        self.discover(module_type).await
    }

    async fn get_module_documentation(
        &self,
        module_id: &str,
        module_type: &str,
    ) -> AppResult<Value> {
        let module_type: ModuleType = module_type.parse()?;

        if module_id.trim().is_empty() {
            return Err(AppError::MissingModuleId);
        }

        // Only names produced by discovery are addressable, so arbitrary
        // path segments never reach the filesystem join below.
        let known = self.discover(module_type).await?;
        if !known.iter().any(|name| name == module_id) {
            return Err(AppError::ModuleNotFound);
        }

        let path = self
            .root_for(module_type)
            .join(format!("{}.{}", module_id, DOC_ARTIFACT_EXT));

        let raw = match fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(AppError::ModuleNotFound),
            Err(e) => return Err(AppError::Io(e)),
        };

        let docs: Value = serde_json::from_str(&raw)
            .map_err(|e| AppError::invalid_artifact(format!("{}: {}", path.display(), e)))?;

        if !docs.is_array() {
            return Err(AppError::invalid_artifact(format!(
                "{}: expected an array of documentation entries",
                path.display()
            )));
        }

        Ok(docs)
    }
}
