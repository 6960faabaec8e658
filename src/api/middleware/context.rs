//! Request context middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::domain::RequestContext;

/// Context injection middleware.
///
/// Stamps every request with the scope of the server it arrived on,
/// then injects the RequestContext into the request extensions.
pub async fn context_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let ctx = RequestContext::new(state.scope);
    request.extensions_mut().insert(ctx);

    next.run(request).await
}
