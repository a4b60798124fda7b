use std::time::Duration;

use anyhow::Context;
use auth_service::client::AuthClient;
use colored::Colorize;

/// Fetches one user and prints it. Usage: `auth-client [ID]` (default 1).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| ".env".into());
    dotenvy::from_path(&config_path).ok();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .init();

    let base_url =
        std::env::var("AUTH_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:50051".into());
    let id: i64 = match std::env::args().nth(1) {
        Some(raw) => raw.parse().with_context(|| format!("invalid user id {raw:?}"))?,
        None => 1,
    };

    let client = AuthClient::with_timeout(base_url, Duration::from_secs(1))?;
    let user = client
        .get(id)
        .await
        .with_context(|| format!("failed to get user by id {id}"))?;

    println!("{}", "User info:".red());
    println!("{}", format!("{user:#?}").green());
    Ok(())
}
