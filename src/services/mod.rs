//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod doc_service;
mod swagger_service;

// Service traits and implementations
pub use doc_service::{DocCatalog, DocService};
pub use swagger_service::{SwaggerCatalog, SwaggerService};

#[cfg(any(test, feature = "test-utils"))]
pub use doc_service::MockDocService;
#[cfg(any(test, feature = "test-utils"))]
pub use swagger_service::MockSwaggerService;
