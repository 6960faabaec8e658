//! Swagger metadata handlers.
//!
//! Both endpoints always answer 200. The declarations visible to a
//! request depend on the scope stamped by the context middleware.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde_json::Value;

use crate::api::AppState;
use crate::domain::RequestContext;

/// Create swagger metadata routes
pub fn swagger_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(resource_listing))
        .route("/:id", get(api_declaration))
}

/// Get the Swagger resource listing
#[utoipa::path(
    get,
    path = "/api/swagger",
    tag = "Swagger",
    responses(
        (status = 200, description = "Swagger resource listing available")
    )
)]
pub async fn resource_listing(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Json<Value> {
    Json(state.swagger_service.resources(&ctx))
}

/// Get the Swagger API declaration for a resource
#[utoipa::path(
    get,
    path = "/api/swagger/{id}",
    tag = "Swagger",
    params(
        ("id" = String, Path, description = "Resource id requested")
    ),
    responses(
        (status = 200, description = "Swagger api declaration available")
    )
)]
pub async fn api_declaration(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Json<Value> {
    Json(state.swagger_service.api_declaration(&ctx, &id))
}
