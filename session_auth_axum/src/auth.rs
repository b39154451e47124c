use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::IntoResponse,
};
use http::{HeaderMap, StatusCode, Uri};
use serde::Deserialize;
use serde_json::{Value, json};
use session_auth::{login_user, logout_user, register_user};

use crate::error::IntoResponseError;
use crate::session::AuthUser;
use crate::state::AuthState;
use crate::transport::request_transport;

/// `{username, password}` as sent by the client, before coercion to text.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawCredentials {
    username: Value,
    password: Value,
}

struct CredentialsBody {
    username: String,
    password: String,
}

/// Text form of a loosely typed JSON field. Numbers and `true` are
/// stringified; `null`, `false`, `0`, arrays and objects read as empty.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) if number.as_f64() != Some(0.0) => number.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => String::new(),
    }
}

/// Missing fields, and a body that is not a JSON object at all, come out
/// empty and surface as "missing username/password".
fn parse_credentials(body: &[u8]) -> CredentialsBody {
    let raw: RawCredentials = serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::debug!("Unreadable credentials body: {}", e);
        RawCredentials::default()
    });
    CredentialsBody {
        username: field_text(&raw.username),
        password: field_text(&raw.password),
    }
}

pub(crate) async fn register(
    State(state): State<AuthState>,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let transport = request_transport(&headers, &uri, &state.config);
    let credentials = parse_credentials(&body);

    let signed_in = register_user(
        &state.config,
        state.store.as_ref(),
        &credentials.username,
        &credentials.password,
        transport,
    )
    .await
    .into_response_error()?;

    Ok((
        signed_in.headers,
        Json(json!({ "ok": true, "username": signed_in.username })),
    ))
}

pub(crate) async fn login(
    State(state): State<AuthState>,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let transport = request_transport(&headers, &uri, &state.config);
    let credentials = parse_credentials(&body);

    let signed_in = login_user(
        &state.config,
        state.store.as_ref(),
        &credentials.username,
        &credentials.password,
        transport,
    )
    .await
    .into_response_error()?;

    Ok((
        signed_in.headers,
        Json(json!({ "ok": true, "username": signed_in.username })),
    ))
}

pub(crate) async fn logout(
    State(state): State<AuthState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let transport = request_transport(&headers, &uri, &state.config);
    let cookie_headers = logout_user(transport).into_response_error()?;
    Ok((cookie_headers, Json(json!({ "ok": true }))))
}

pub(crate) async fn me(user: Option<AuthUser>) -> Json<Value> {
    match user {
        Some(user) => Json(json!({ "ok": true, "loggedIn": true, "username": user.username })),
        None => Json(json!({ "ok": true, "loggedIn": false })),
    }
}
