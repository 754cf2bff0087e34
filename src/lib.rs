pub mod api;
pub mod error;
pub mod events;
pub mod telegram;
pub mod templates;
pub mod utils;

use serde::Deserialize;
use std::sync::Arc;

use crate::telegram::TelegramNotifier;

#[derive(Debug, Deserialize, Clone)]
pub struct NotifyConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub with_webhook_secret: Option<bool>,
    pub webhook_secret: Option<String>,
    pub custom_template: Option<String>,
}

impl NotifyConfig {
    /// Returns true if webhook secret validation should be enforced.
    pub fn needs_webhook_secret(&self) -> bool {
        self.with_webhook_secret.unwrap_or(false)
    }

    /// Returns true if a valid (non-empty) webhook_secret is set.
    pub fn has_valid_secret(&self) -> bool {
        self.webhook_secret
            .as_ref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    /// Returns the operator-supplied template override, or "" when the
    /// built-in templates should be used.
    pub fn template_override(&self) -> &str {
        self.custom_template.as_deref().unwrap_or("")
    }
}

pub struct AppState {
    pub config: NotifyConfig,
    pub notifier: TelegramNotifier,
}

pub type SharedState = Arc<AppState>;
