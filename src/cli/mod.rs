//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the tenant and global admin HTTP servers
//! - `check` - Inspect the loaded artifacts

pub mod args;

pub use args::{Cli, Commands};
