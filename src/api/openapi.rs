//! OpenAPI documentation configuration.
//!
//! The generated document is served as plain JSON at /api-docs/openapi.json.

use utoipa::OpenApi;

use crate::api::handlers::{doc_handler, swagger_handler};
use crate::domain::{ModuleType, ServerScope};

/// OpenAPI documentation for the module documentation API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Module Documentation API",
        version = "0.1.0",
        description = "Serves per-module documentation and Swagger 1.2 metadata",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Tenant server"),
        (url = "http://localhost:3001", description = "Global admin server")
    ),
    paths(
        // Documentation endpoints
        doc_handler::list_modules,
        doc_handler::get_module_documentation,
        // Swagger metadata endpoints
        swagger_handler::resource_listing,
        swagger_handler::api_declaration,
    ),
    components(
        schemas(
            ModuleType,
            ServerScope,
        )
    ),
    tags(
        (name = "Documentation", description = "Module documentation lookup"),
        (name = "Swagger", description = "Swagger 1.2 resource metadata")
    )
)]
pub struct ApiDoc;
