//! Application route configuration.

use axum::{extract::State, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{doc_routes, swagger_routes};
use super::middleware::context_middleware;
use super::openapi::ApiDoc;
use super::AppState;
use crate::domain::ServerScope;

/// Create the application router with all routes configured.
///
/// The same router shape is mounted on the tenant and the global admin
/// server, the state decides which scope a request is answered for.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health))
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        // Module documentation routes
        .nest("/api/doc", doc_routes())
        // Swagger metadata routes
        .nest("/api/swagger", swagger_routes())
        // Global middleware
        .layer(middleware::from_fn_with_state(
            state.clone(),
            context_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    scope: ServerScope,
}

/// Health check endpoint
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        scope: state.scope,
    })
}

/// Serve the generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
