use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use session_auth_axum::{AuthState, AuthUser, session_auth_router};

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn whoami(user: AuthUser) -> Json<Value> {
    Json(json!({ "ok": true, "username": user.username }))
}

/// A nest path must look like `/segment[/segment...]`; `""` and `"/"` make
/// axum panic when the router is built.
pub(crate) fn validate_route_prefix(prefix: &str) -> Result<(), String> {
    if !prefix.starts_with('/') || prefix.len() < 2 || prefix.ends_with('/') {
        return Err(format!(
            "AUTH_ROUTE_PREFIX must start with '/', name at least one segment and not end with '/': {prefix:?}"
        ));
    }
    Ok(())
}

/// The demo application: auth endpoints under `auth_prefix`, a health check
/// and one protected route.
pub(crate) fn build_app(state: AuthState, auth_prefix: &str) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/whoami", get(whoami))
        .with_state(state.clone())
        .nest(auth_prefix, session_auth_router(state))
}
