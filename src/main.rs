use auth_service::{app, config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| ".env".into());
    let loaded = dotenvy::from_path(&config_path).is_ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "auth_service=debug,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    if !loaded {
        tracing::debug!(path = %config_path, "no config file loaded; using process environment");
    }

    let config = AppConfig::from_env()?;
    let addr = config.addr()?;
    let state = AppState::init(config).await?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    app::serve(listener, app::build_app(state)).await
}
