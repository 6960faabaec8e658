//! Tests for the filesystem-backed catalogs.
//!
//! Each test lays out artifacts in a temporary directory and checks how
//! the catalogs discover, serve, and reject them.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;

use docapi::config::Config;
use docapi::domain::{RequestContext, ServerScope};
use docapi::errors::AppError;
use docapi::services::{DocCatalog, DocService, SwaggerCatalog, SwaggerService};

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config(root: &Path) -> Config {
    Config {
        docs_dir: root.join("docs"),
        swagger_dir: root.join("swagger"),
    }
}

fn write_artifact(dir: &Path, name: &str, value: &Value) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join(format!("{}.json", name)),
        serde_json::to_vec_pretty(value).unwrap(),
    )
    .unwrap();
}

// =============================================================================
// Documentation Catalog Tests
// =============================================================================

#[tokio::test]
async fn test_list_modules_sorted_by_name() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    write_artifact(&config.docs_dir.join("backend"), "oae-content", &json!([]));
    write_artifact(&config.docs_dir.join("backend"), "oae-activity", &json!([]));

    let catalog = DocCatalog::new(&config);
    let modules = catalog.list_modules("backend").await.unwrap();

    assert_eq!(modules, vec!["oae-activity", "oae-content"]);
}

#[tokio::test]
async fn test_list_modules_empty_when_directory_missing() {
    let root = TempDir::new().unwrap();
    let catalog = DocCatalog::new(&test_config(root.path()));

    let modules = catalog.list_modules("frontend").await.unwrap();

    assert!(modules.is_empty());
}

#[tokio::test]
async fn test_list_modules_ignores_unrelated_files() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    let backend = config.docs_dir.join("backend");
    write_artifact(&backend, "oae-activity", &json!([]));
    fs::write(backend.join("README.md"), "not an artifact").unwrap();

    let catalog = DocCatalog::new(&config);
    let modules = catalog.list_modules("backend").await.unwrap();

    assert_eq!(modules, vec!["oae-activity"]);
}

#[tokio::test]
async fn test_list_modules_rejects_unknown_type() {
    let root = TempDir::new().unwrap();
    let catalog = DocCatalog::new(&test_config(root.path()));

    let err = catalog.list_modules("middleware").await.unwrap_err();

    assert!(matches!(err, AppError::InvalidModuleType));
}

#[tokio::test]
async fn test_module_documentation_round_trips() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    let docs = json!([
        { "description": "Create an activity", "params": [{ "name": "verb" }] },
        { "description": "Delete an activity", "params": [] },
    ]);
    write_artifact(&config.docs_dir.join("backend"), "oae-activity", &docs);

    let catalog = DocCatalog::new(&config);
    let payload = catalog
        .get_module_documentation("oae-activity", "backend")
        .await
        .unwrap();

    assert_eq!(payload, docs);
}

#[tokio::test]
async fn test_module_documentation_unknown_module_not_found() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    write_artifact(&config.docs_dir.join("backend"), "oae-activity", &json!([]));

    let catalog = DocCatalog::new(&config);
    let err = catalog
        .get_module_documentation("oae-ghost", "backend")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ModuleNotFound));
}

#[tokio::test]
async fn test_module_documentation_blank_id_rejected() {
    let root = TempDir::new().unwrap();
    let catalog = DocCatalog::new(&test_config(root.path()));

    let err = catalog
        .get_module_documentation("  ", "backend")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::MissingModuleId));
}

#[tokio::test]
async fn test_module_documentation_invalid_type_rejected_first() {
    let root = TempDir::new().unwrap();
    let catalog = DocCatalog::new(&test_config(root.path()));

    // An invalid type wins over a blank module id
    let err = catalog
        .get_module_documentation("", "sideways")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidModuleType));
}

#[tokio::test]
async fn test_module_documentation_path_traversal_is_inert() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    write_artifact(&config.docs_dir.join("backend"), "oae-activity", &json!([]));
    // A file outside the backend directory that a crafted id might target
    write_artifact(&config.docs_dir, "secrets", &json!(["do not serve"]));

    let catalog = DocCatalog::new(&config);
    let err = catalog
        .get_module_documentation("../secrets", "backend")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ModuleNotFound));
}

#[tokio::test]
async fn test_module_documentation_malformed_artifact() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    let backend = config.docs_dir.join("backend");
    fs::create_dir_all(&backend).unwrap();
    fs::write(backend.join("oae-broken.json"), "{ not json").unwrap();

    let catalog = DocCatalog::new(&config);
    let err = catalog
        .get_module_documentation("oae-broken", "backend")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidArtifact(_)));
}

#[tokio::test]
async fn test_module_documentation_requires_array_payload() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    write_artifact(
        &config.docs_dir.join("frontend"),
        "admin-ui",
        &json!({ "description": "not a list" }),
    );

    let catalog = DocCatalog::new(&config);
    let err = catalog
        .get_module_documentation("admin-ui", "frontend")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidArtifact(_)));
}

// =============================================================================
// Swagger Catalog Tests
// =============================================================================

#[tokio::test]
async fn test_swagger_listing_sorted_with_descriptions() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    let tenant_dir = config.swagger_dir.join("tenant");
    write_artifact(
        &tenant_dir,
        "users",
        &json!({ "description": "User operations", "apis": [] }),
    );
    write_artifact(&tenant_dir, "content", &json!({ "apis": [] }));

    let catalog = SwaggerCatalog::load(&config).unwrap();
    let ctx = RequestContext::new(ServerScope::Tenant);
    let listing = catalog.resources(&ctx);

    assert_eq!(listing["swaggerVersion"], "1.2");
    assert_eq!(listing["apiVersion"], "0.1");
    assert!(listing["info"]["title"].is_string());
    assert_eq!(
        listing["apis"],
        json!([
            { "path": "/content" },
            { "path": "/users", "description": "User operations" },
        ])
    );
}

#[tokio::test]
async fn test_swagger_scopes_are_isolated() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    write_artifact(
        &config.swagger_dir.join("tenant"),
        "users",
        &json!({ "apis": [] }),
    );
    write_artifact(
        &config.swagger_dir.join("admin"),
        "tenants",
        &json!({ "apis": [] }),
    );

    let catalog = SwaggerCatalog::load(&config).unwrap();

    let tenant_listing = catalog.resources(&RequestContext::new(ServerScope::Tenant));
    assert_eq!(tenant_listing["apis"], json!([{ "path": "/users" }]));

    let admin_listing = catalog.resources(&RequestContext::new(ServerScope::GlobalAdmin));
    assert_eq!(admin_listing["apis"], json!([{ "path": "/tenants" }]));
}

#[tokio::test]
async fn test_swagger_declaration_round_trips() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    let declaration = json!({
        "apiVersion": "0.1",
        "swaggerVersion": "1.2",
        "resourcePath": "/users",
        "apis": [{ "path": "/users/{id}", "operations": [] }],
    });
    write_artifact(&config.swagger_dir.join("tenant"), "users", &declaration);

    let catalog = SwaggerCatalog::load(&config).unwrap();
    let ctx = RequestContext::new(ServerScope::Tenant);

    assert_eq!(catalog.api_declaration(&ctx, "users"), declaration);
}

#[tokio::test]
async fn test_swagger_unknown_id_gets_empty_declaration() {
    let root = TempDir::new().unwrap();
    let catalog = SwaggerCatalog::load(&test_config(root.path())).unwrap();
    let ctx = RequestContext::new(ServerScope::GlobalAdmin);

    let declaration = catalog.api_declaration(&ctx, "ghost");

    assert_eq!(
        declaration,
        json!({
            "apiVersion": "0.1",
            "swaggerVersion": "1.2",
            "resourcePath": "/ghost",
            "apis": [],
        })
    );
}

#[tokio::test]
async fn test_swagger_missing_directories_load_empty() {
    let root = TempDir::new().unwrap();
    let catalog = SwaggerCatalog::load(&test_config(root.path())).unwrap();

    assert_eq!(catalog.resource_count(ServerScope::Tenant), 0);
    assert_eq!(catalog.resource_count(ServerScope::GlobalAdmin), 0);

    let listing = catalog.resources(&RequestContext::new(ServerScope::Tenant));
    assert_eq!(listing["apis"], json!([]));
}

#[tokio::test]
async fn test_swagger_malformed_declaration_fails_load() {
    let root = TempDir::new().unwrap();
    let config = test_config(root.path());
    let admin_dir = config.swagger_dir.join("admin");
    fs::create_dir_all(&admin_dir).unwrap();
    fs::write(admin_dir.join("tenants.json"), "][").unwrap();

    let err = SwaggerCatalog::load(&config).unwrap_err();

    assert!(matches!(err, AppError::InvalidArtifact(_)));
}
