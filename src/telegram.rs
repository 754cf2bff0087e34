//! Telegram Bot API delivery client

use serde::Serialize;
use tracing::debug;

use crate::error::{NotifyError, Result};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client for delivering rendered messages to one Telegram chat.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
    disable_web_page_preview: bool,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            bot_token,
            chat_id,
        }
    }

    /// Sends one already-rendered message. Telegram parses the text as
    /// HTML, matching the escaping the renderer applied.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.bot_token);
        let request_body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Delivery(format!(
                "Telegram API returned status {}: {}",
                status, body
            )));
        }

        debug!("Delivered message to chat {}", self.chat_id);
        Ok(())
    }
}
