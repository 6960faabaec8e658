//! Check command - Inspects the loaded documentation and swagger artifacts.

use crate::config::Config;
use crate::domain::{ModuleType, ServerScope};
use crate::errors::AppResult;
use crate::services::{DocCatalog, DocService, SwaggerCatalog};

/// Execute the check command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!(
        "Checking artifacts under {} and {}",
        config.docs_dir.display(),
        config.swagger_dir.display()
    );

    let docs = DocCatalog::new(&config);
    for module_type in ModuleType::all() {
        let modules = docs.list_modules(module_type.as_str()).await?;
        println!("{} modules: {}", module_type, modules.len());
        for name in &modules {
            println!("  {}", name);
        }
    }

    let swagger = SwaggerCatalog::load(&config)?;
    for scope in [ServerScope::Tenant, ServerScope::GlobalAdmin] {
        println!(
            "{} swagger declarations: {}",
            scope,
            swagger.resource_count(scope)
        );
    }

    Ok(())
}
