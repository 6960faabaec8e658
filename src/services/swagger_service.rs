//! Swagger service - Serves Swagger 1.2 resource listings and API declarations.
//!
//! Declarations are loaded once at startup and held in memory, so request
//! handling is infallible. Unknown resource ids get an empty declaration.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{json, Value};

use crate::config::{
    Config, DOC_ARTIFACT_EXT, SWAGGER_API_VERSION, SWAGGER_INFO_DESCRIPTION, SWAGGER_INFO_TITLE,
    SWAGGER_VERSION,
};
use crate::domain::{RequestContext, ServerScope};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Swagger service trait for dependency injection.
///
/// The per-request context decides which scope's declarations are visible.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SwaggerService: Send + Sync {
    /// Get the Swagger resource listing for the request's scope
    fn resources(&self, ctx: &RequestContext) -> Value;

    /// Get the API declaration for a single resource id
    fn api_declaration(&self, ctx: &RequestContext, id: &str) -> Value;
}

/// Concrete implementation of SwaggerService backed by startup-loaded files.
///
/// Declarations live under `<swagger_dir>/tenant/*.json` and
/// `<swagger_dir>/admin/*.json`, one file per resource id.
#[derive(Debug)]
pub struct SwaggerCatalog {
    tenant: BTreeMap<String, Value>,
    admin: BTreeMap<String, Value>,
}

impl SwaggerCatalog {
    /// Load all declarations from the configured swagger directory.
    ///
    /// A missing scope directory yields an empty registry for that scope.
    /// Unreadable or malformed declaration files abort startup.
    pub fn load(config: &Config) -> AppResult<Self> {
        Ok(Self {
            tenant: Self::load_scope(&config.swagger_dir, ServerScope::Tenant)?,
            admin: Self::load_scope(&config.swagger_dir, ServerScope::GlobalAdmin)?,
        })
    }

    fn load_scope(swagger_dir: &Path, scope: ServerScope) -> AppResult<BTreeMap<String, Value>> {
        let dir = swagger_dir.join(scope.as_str());
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("No swagger declarations found at {}", dir.display());
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        let mut declarations = BTreeMap::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOC_ARTIFACT_EXT) {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let raw = std::fs::read_to_string(&path)?;
            let declaration: Value = serde_json::from_str(&raw)
                .map_err(|e| AppError::invalid_artifact(format!("{}: {}", path.display(), e)))?;
            if !declaration.is_object() {
                return Err(AppError::invalid_artifact(format!(
                    "{}: expected a declaration object",
                    path.display()
                )));
            }

            declarations.insert(id.to_string(), declaration);
        }

        tracing::info!(
            "Loaded {} swagger declarations for the {} scope",
            declarations.len(),
            scope
        );
        Ok(declarations)
    }

    fn registry(&self, ctx: &RequestContext) -> &BTreeMap<String, Value> {
        if ctx.is_global_admin() {
            &self.admin
        } else {
            &self.tenant
        }
    }

    /// Number of declarations registered for a scope
    pub fn resource_count(&self, scope: ServerScope) -> usize {
        match scope {
            ServerScope::Tenant => self.tenant.len(),
            ServerScope::GlobalAdmin => self.admin.len(),
        }
    }

    /// Declaration served for ids that have no registered resource
    fn empty_declaration(id: &str) -> Value {
        json!({
            "apiVersion": SWAGGER_API_VERSION,
            "swaggerVersion": SWAGGER_VERSION,
            "resourcePath": format!("/{}", id),
            "apis": [],
        })
    }
}

impl SwaggerService for SwaggerCatalog {
    fn resources(&self, ctx: &RequestContext) -> Value {
        let apis: Vec<Value> = self
            .registry(ctx)
            .iter()
            .map(|(id, declaration)| {
                let mut api = json!({ "path": format!("/{}", id) });
                if let Some(description) = declaration.get("description").and_then(Value::as_str) {
                    api["description"] = Value::String(description.to_string());
                }
                api
            })
            .collect();

        json!({
            "apiVersion": SWAGGER_API_VERSION,
            "swaggerVersion": SWAGGER_VERSION,
            "info": {
                "title": SWAGGER_INFO_TITLE,
                "description": SWAGGER_INFO_DESCRIPTION,
            },
            "apis": apis,
        })
    }

    fn api_declaration(&self, ctx: &RequestContext, id: &str) -> Value {
        self.registry(ctx)
            .get(id)
            .cloned()
            .unwrap_or_else(|| Self::empty_declaration(id))
    }
}
