use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use whisper_relay::config::Config;
use whisper_relay::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("whisper_relay=debug,tower_http=debug")
        .init();

    // Load configuration - env-only deployments run without a config file
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in config_paths {
        match Config::load(&path) {
            Ok(cfg) => {
                info!("Loaded configuration from {}", path);
                config = Some(cfg);
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
                continue;
            }
        }
    }
    let config = config.unwrap_or_else(Config::from_env);

    if config.whisper.api_key.is_none() {
        tracing::warn!("No whisper API key configured; transcription requests will fail");
    }

    let state = AppState::new(config.clone());
    let app = whisper_relay::app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
