//! session_auth_axum - Axum integration for session-auth
//!
//! Provides a router with `register`, `login`, `logout` and `me` endpoints,
//! meant to be nested under [`DEFAULT_AUTH_ROUTE_PREFIX`], and an [`AuthUser`]
//! extractor for protecting the application's own handlers.
//!
//! ```no_run
//! use axum::Router;
//! use session_auth_axum::{AuthConfig, AuthState, DEFAULT_AUTH_ROUTE_PREFIX, session_auth_router};
//!
//! # async fn build() -> Result<Router, Box<dyn std::error::Error>> {
//! let config = AuthConfig::from_env()?;
//! let store = session_auth_axum::connect_user_store("memory", "").await?;
//! let state = AuthState::new(config, store);
//!
//! let app = Router::new().nest(DEFAULT_AUTH_ROUTE_PREFIX, session_auth_router(state));
//! # Ok(app)
//! # }
//! ```

mod auth;
mod error;
mod router;
mod session;
mod state;
mod transport;

pub use error::IntoResponseError;
pub use router::session_auth_router;
pub use session::{AuthRejection, AuthUser};
pub use state::AuthState;
pub use transport::request_transport;

// Re-export what an application needs to build the router state
pub use session_auth::{
    AuthConfig, ConfigError, DEFAULT_AUTH_ROUTE_PREFIX, UserError, UserStore, connect_user_store,
};
