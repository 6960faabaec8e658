//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Module documentation API - Serves module docs and Swagger metadata
#[derive(Parser, Debug)]
#[command(name = "docapi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the tenant and global admin HTTP servers
    Serve(ServeArgs),

    /// Inspect the loaded documentation and swagger artifacts
    Check,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
    pub host: String,

    /// Port the tenant server listens on
    #[arg(long, default_value = "3000", env = "TENANT_PORT")]
    pub tenant_port: u16,

    /// Port the global admin server listens on
    #[arg(long, default_value = "3001", env = "ADMIN_PORT")]
    pub admin_port: u16,
}
