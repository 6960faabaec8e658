//! Module documentation API
//!
//! A thin HTTP layer that exposes the documentation of registered modules
//! and Swagger 1.2 metadata, served identically on a tenant and a global
//! admin server.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start both servers
//! cargo run -- serve
//!
//! # Inspect the loaded artifacts
//! cargo run -- check
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{ModuleType, RequestContext, ServerScope};
pub use errors::{AppError, AppResult};
