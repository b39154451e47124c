use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Response},
};
use http::{StatusCode, header::COOKIE, request::Parts};
use session_auth::{SessionIdentity, current_user};

use crate::error::error_body;
use crate::state::AuthState;

/// Rejection of the [`AuthUser`] extractor: `401 {"ok":false,"error":"unauthorized"}`.
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        error_body(StatusCode::UNAUTHORIZED, "unauthorized").into_response()
    }
}

/// Authenticated user, available as an Axum extractor
///
/// Verifies the `session` cookie of the request. Use `Option<AuthUser>` for
/// endpoints that serve anonymous callers too.
///
/// ```no_run
/// use axum::{Router, routing::get};
/// use session_auth_axum::{AuthState, AuthUser};
///
/// async fn protected(user: AuthUser) -> String {
///     format!("Hello, {}!", user.username)
/// }
///
/// # fn build(state: AuthState) -> Router {
/// Router::new().route("/protected", get(protected)).with_state(state)
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
}

impl From<SessionIdentity> for AuthUser {
    fn from(identity: SessionIdentity) -> Self {
        Self {
            username: identity.username,
        }
    }
}

/// All `Cookie` headers of the request joined into one; HTTP/2 clients may
/// send several.
pub(crate) fn cookie_header(parts_headers: &http::HeaderMap) -> Option<String> {
    let values: Vec<&str> = parts_headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join("; "))
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthState::from_ref(state);
        let cookies = cookie_header(&parts.headers);

        current_user(&auth.config, cookies.as_deref())
            .map(AuthUser::from)
            .ok_or_else(|| {
                tracing::debug!("No valid session on {} {}", parts.method, parts.uri.path());
                AuthRejection
            })
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result = <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}
