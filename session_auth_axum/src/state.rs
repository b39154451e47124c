use std::sync::Arc;

use session_auth::{AuthConfig, UserStore};

/// Shared state behind the auth endpoints and the [`AuthUser`](crate::AuthUser) extractor.
///
/// Applications with their own state implement `FromRef<AppState>` for this
/// type so the extractor can find it.
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AuthConfig>,
    pub store: Arc<dyn UserStore>,
}

impl AuthState {
    pub fn new(config: AuthConfig, store: Arc<dyn UserStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
