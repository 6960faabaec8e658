//! Serve command - Starts the tenant and global admin HTTP servers.

use std::sync::Arc;

use axum::Router;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::domain::ServerScope;
use crate::errors::{AppError, AppResult};
use crate::services::{DocCatalog, DocService, SwaggerCatalog, SwaggerService};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting servers...");

    // Shared services, both servers answer from the same catalogs
    let doc_service: Arc<dyn DocService> = Arc::new(DocCatalog::new(&config));
    let swagger_service: Arc<dyn SwaggerService> = Arc::new(SwaggerCatalog::load(&config)?);

    // One state per server, differing only in scope
    let tenant_state = AppState::new(
        ServerScope::Tenant,
        doc_service.clone(),
        swagger_service.clone(),
    );
    let admin_state = AppState::new(ServerScope::GlobalAdmin, doc_service, swagger_service);

    let tenant_app = create_router(tenant_state);
    let admin_app = create_router(admin_state);

    // Run both servers until either fails
    tokio::try_join!(
        run_server(&args.host, args.tenant_port, tenant_app, ServerScope::Tenant),
        run_server(&args.host, args.admin_port, admin_app, ServerScope::GlobalAdmin),
    )?;

    Ok(())
}

/// Bind and serve a single scope
async fn run_server(host: &str, port: u16, app: Router, scope: ServerScope) -> AppResult<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("{} server running on http://{}", scope, addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("{} server error: {}", scope, e)))?;

    Ok(())
}
