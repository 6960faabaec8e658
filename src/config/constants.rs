//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Module Types
// =============================================================================

/// Identifier for server-side modules
pub const MODULE_TYPE_BACKEND: &str = "backend";

/// Identifier for UI modules
pub const MODULE_TYPE_FRONTEND: &str = "frontend";

/// All valid module type values
pub const VALID_MODULE_TYPES: &[&str] = &[MODULE_TYPE_BACKEND, MODULE_TYPE_FRONTEND];

// =============================================================================
// Documentation Artifacts
// =============================================================================

/// Default directory holding per-type documentation artifacts
pub const DEFAULT_DOCS_DIR: &str = "data/docs";

/// Default directory holding per-scope Swagger declarations
pub const DEFAULT_SWAGGER_DIR: &str = "data/swagger";

/// File extension of documentation and Swagger artifacts
pub const DOC_ARTIFACT_EXT: &str = "json";

// =============================================================================
// Swagger Metadata
// =============================================================================

/// Version of the Swagger resource listing format served by this API
pub const SWAGGER_VERSION: &str = "1.2";

/// Version reported for the documented APIs themselves
pub const SWAGGER_API_VERSION: &str = "0.1";

/// Title shown in the Swagger resource listing
pub const SWAGGER_INFO_TITLE: &str = "Module Documentation API";

/// Description shown in the Swagger resource listing
pub const SWAGGER_INFO_DESCRIPTION: &str =
    "REST APIs exposed by the registered application modules";
