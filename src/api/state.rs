//! Application state - Dependency injection container.
//!
//! Each server gets its own state carrying the scope it answers for.
//! Both states share the same service instances.

use std::sync::Arc;

use crate::domain::ServerScope;
use crate::services::{DocService, SwaggerService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Scope of the server this state belongs to
    pub scope: ServerScope,
    /// Documentation service
    pub doc_service: Arc<dyn DocService>,
    /// Swagger service
    pub swagger_service: Arc<dyn SwaggerService>,
}

impl AppState {
    /// Create application state with manually injected services.
    pub fn new(
        scope: ServerScope,
        doc_service: Arc<dyn DocService>,
        swagger_service: Arc<dyn SwaggerService>,
    ) -> Self {
        Self {
            scope,
            doc_service,
            swagger_service,
        }
    }
}
