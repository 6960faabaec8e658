//! Module documentation handlers.
//!
//! Handlers forward the raw path segments to the documentation service
//! and convert its answer into a response. Validation lives in the service.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;

use crate::api::AppState;
use crate::errors::AppResult;

/// Create documentation routes
pub fn doc_routes() -> Router<AppState> {
    Router::new()
        .route("/:type", get(list_modules))
        .route("/:type/:module", get(get_module_documentation))
}

/// List the modules that have documentation
#[utoipa::path(
    get,
    path = "/api/doc/{type}",
    tag = "Documentation",
    params(
        ("type" = String, Path, description = "Module type, \"backend\" or \"frontend\"")
    ),
    responses(
        (status = 200, description = "List of documentation modules available", body = Vec<String>),
        (status = 400, description = "Invalid or missing module type")
    )
)]
pub async fn list_modules(
    State(state): State<AppState>,
    Path(module_type): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let modules = state.doc_service.list_modules(&module_type).await?;

    Ok(Json(modules))
}

/// Get the documentation for a particular module
#[utoipa::path(
    get,
    path = "/api/doc/{type}/{module}",
    tag = "Documentation",
    params(
        ("type" = String, Path, description = "Module type, \"backend\" or \"frontend\""),
        ("module" = String, Path, description = "The module to get the documentation for")
    ),
    responses(
        (status = 200, description = "Documentation for the requested module"),
        (status = 400, description = "Invalid or missing module type"),
        (status = 404, description = "No documentation for this module was found")
    )
)]
pub async fn get_module_documentation(
    State(state): State<AppState>,
    Path((module_type, module)): Path<(String, String)>,
) -> AppResult<Json<Value>> {
    let docs = state
        .doc_service
        .get_module_documentation(&module, &module_type)
        .await?;

    Ok(Json(docs))
}
