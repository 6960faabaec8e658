//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! DDD: Domain layer has NO external dependencies (except error types).
//! Contains: Entities, Value Objects, Domain Services.

pub mod context;
pub mod module;

pub use context::{RequestContext, ServerScope};
pub use module::ModuleType;
