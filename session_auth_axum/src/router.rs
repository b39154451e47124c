//! Router for the session endpoints

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::auth::{login, logout, me, register};
use crate::state::AuthState;

/// Create a router for the session endpoints
///
/// Mount it under a prefix such as [`DEFAULT_AUTH_ROUTE_PREFIX`](crate::DEFAULT_AUTH_ROUTE_PREFIX):
/// - `POST {prefix}/register`
/// - `POST {prefix}/login`
/// - `POST {prefix}/logout`
/// - `GET {prefix}/me`
pub fn session_auth_router(state: AuthState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}
