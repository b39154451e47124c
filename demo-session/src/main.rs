use std::env;

use dotenvy::dotenv;

use session_auth_axum::{AuthConfig, AuthState, DEFAULT_AUTH_ROUTE_PREFIX, connect_user_store};

mod app;
mod server;
use server::{init_tracing, spawn_http_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_tracing("demo_session");

    let config = AuthConfig::from_env()?;

    let store_type = env::var("USER_STORE_TYPE").unwrap_or_else(|_| "memory".to_string());
    let store_url = env::var("USER_STORE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let store = connect_user_store(&store_type, &store_url).await?;

    let auth_prefix =
        env::var("AUTH_ROUTE_PREFIX").unwrap_or_else(|_| DEFAULT_AUTH_ROUTE_PREFIX.to_string());
    app::validate_route_prefix(&auth_prefix)?;
    let port = match env::var("PORT") {
        Ok(port) => port.parse::<u16>()?,
        Err(_) => 3000,
    };

    let app = app::build_app(AuthState::new(config, store), &auth_prefix);

    spawn_http_server(port, app).await??;
    Ok(())
}
