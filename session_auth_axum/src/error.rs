use axum::Json;
use http::StatusCode;
use serde_json::{Value, json};
use session_auth::CoordinationError;

/// Error response body: `{"ok": false, "error": <message>}`.
pub(crate) fn error_body(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "ok": false, "error": message })))
}

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<Value>)>;
}

/// Validation reasons go to the client verbatim. Internal failures are
/// replaced with a generic message; their details were already logged when
/// the `CoordinationError` was built.
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<Value>)> {
        self.map_err(|e| match e {
            CoordinationError::Validation(reason) => error_body(StatusCode::BAD_REQUEST, &reason),
            CoordinationError::Unauthorized => {
                error_body(StatusCode::UNAUTHORIZED, "invalid credentials")
            }
            CoordinationError::Conflict(_) => error_body(StatusCode::CONFLICT, "username exists"),
            CoordinationError::Database(_)
            | CoordinationError::SessionError(_)
            | CoordinationError::UtilsError(_) => {
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session_auth::{SessionError, UserError, UtilError};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn status_and_message(err: CoordinationError) -> (StatusCode, Value) {
        let result: Result<(), CoordinationError> = Err(err);
        let (status, Json(body)) = result.into_response_error().unwrap_err();
        (status, body)
    }

    #[test]
    fn test_validation_is_bad_request_with_reason() {
        let (status, body) =
            status_and_message(CoordinationError::Validation("invalid username".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "ok": false, "error": "invalid username" }));
    }

    #[test]
    fn test_unauthorized() {
        let (status, body) = status_and_message(CoordinationError::Unauthorized);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid credentials");
    }

    #[test]
    fn test_conflict_hides_username() {
        let (status, body) = status_and_message(CoordinationError::Conflict("alice".to_string()));
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "username exists");
    }

    #[test]
    fn test_internal_errors_are_opaque() {
        for err in [
            CoordinationError::Database("connection refused at 10.0.0.5".to_string()),
            CoordinationError::SessionError(SessionError::Crypto("hmac".to_string())),
            CoordinationError::UtilsError(UtilError::Crypto("rng".to_string())),
        ] {
            let (status, body) = status_and_message(err);
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({ "ok": false, "error": "internal server error" }));
        }
    }

    /// Counts ERROR-level events seen by the subscriber
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_store_failure_is_logged_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(count.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let result: Result<(), CoordinationError> =
                Err(UserError::Storage("connection reset".to_string()).into());
            let (status, _) = result.into_response_error().unwrap_err();
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        });

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_ok_passes_through() {
        let result: Result<u8, CoordinationError> = Ok(7);
        assert_eq!(result.into_response_error().unwrap(), 7);
    }
}
