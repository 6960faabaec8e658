//! Request context and server scope.
//!
//! The same routes are mounted on two servers. The scope records which
//! server a request arrived on so collaborators can answer accordingly.

use serde::Serialize;
use utoipa::ToSchema;

/// The server a request was received on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServerScope {
    /// The tenant-facing server
    Tenant,
    /// The global administration server
    #[serde(rename = "admin")]
    GlobalAdmin,
}

impl ServerScope {
    /// Get the canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerScope::Tenant => "tenant",
            ServerScope::GlobalAdmin => "admin",
        }
    }
}

impl std::fmt::Display for ServerScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-request context carried through the middleware chain
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    pub scope: ServerScope,
}

impl RequestContext {
    /// Create a context for the given scope
    pub fn new(scope: ServerScope) -> Self {
        Self { scope }
    }

    /// Check if the request arrived on the global admin server
    pub fn is_global_admin(&self) -> bool {
        matches!(self.scope, ServerScope::GlobalAdmin)
    }
}
