use axum::{Router, routing};
use pr_notify::api::{handle_webhook, root};
use pr_notify::error::{NotifyError, Result};
use pr_notify::telegram::TelegramNotifier;
use pr_notify::{AppState, NotifyConfig};
use std::fs;
use std::sync::Arc;
use tracing::{self, info};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8888";
const DEFAULT_CONFIG_PATH: &str = "notify_config.toml";

/// Load and parse the configuration file
fn load_config(path: &str) -> Result<NotifyConfig> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        NotifyError::ConfigError(format!("Failed to read config file '{}': {}", path, e))
    })?;

    let config: NotifyConfig = toml::from_str(&config_str).map_err(|e| {
        NotifyError::ConfigError(format!("Failed to parse config file '{}': {}", path, e))
    })?;

    Ok(config)
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
    let config_path =
        std::env::var("NOTIFY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config: NotifyConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let notifier = TelegramNotifier::new(config.bot_token.clone(), config.chat_id.clone());
    let state = Arc::new(AppState { config, notifier });

    tracing_subscriber::fmt::init();
    let app = Router::new()
        .route("/", routing::get(root))
        .route("/webhook", routing::post(handle_webhook))
        .with_state(state);

    info!("Listening on {}", bind_address);
    info!("Using config at {:?}", config_path);
    let listener = tokio::net::TcpListener::bind(bind_address).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
