//! HTTP request handlers.

pub mod doc_handler;
pub mod swagger_handler;

pub use doc_handler::doc_routes;
pub use swagger_handler::swagger_routes;
