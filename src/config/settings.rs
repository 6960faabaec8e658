//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{DEFAULT_DOCS_DIR, DEFAULT_SWAGGER_DIR};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of documentation artifacts, one subdirectory per module type
    pub docs_dir: PathBuf,
    /// Root directory of Swagger declarations, one subdirectory per server scope
    pub swagger_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            docs_dir: env::var("DOCS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DOCS_DIR)),
            swagger_dir: env::var("SWAGGER_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SWAGGER_DIR)),
        }
    }
}
