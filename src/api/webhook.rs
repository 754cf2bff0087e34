//! Webhook handler for GitHub pull request events

use axum::{
    body::Bytes,
    extract::State as AxumState,
    http::{HeaderMap, StatusCode},
};
use tracing::{error, info, warn};

use crate::SharedState;
use crate::error::NotifyError;
use crate::events::{SUPPORTED_EVENTS, TemplateData};
use crate::templates;
use crate::utils::verify_github_signature;

pub async fn root() -> &'static str {
    "pr-notify"
}

/// Handles the GitHub webhook POST request.
pub async fn handle_webhook(
    AxumState(state): AxumState<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    // Only handle pull request, review, and review comment events.
    let event_opt = headers.get("X-GitHub-Event").and_then(|v| v.to_str().ok());
    let Some(event_name) = event_opt.filter(|e| SUPPORTED_EVENTS.contains(e)) else {
        info!("Ignoring {:?} event", event_opt);
        return StatusCode::NO_CONTENT;
    };

    // Webhook signature validation if required
    if state.config.needs_webhook_secret() {
        let signature_opt = headers
            .get("X-Hub-Signature-256")
            .and_then(|v| v.to_str().ok());
        let Some(signature) = signature_opt else {
            error!("Webhook secret required, but no signature header supplied.");
            return StatusCode::UNAUTHORIZED;
        };
        if !state.config.has_valid_secret() {
            error!("Webhook secret required, but none was configured.");
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
        let secret = state.config.webhook_secret.as_ref().unwrap();
        if !verify_github_signature(secret, &body, signature) {
            error!("Signature verification failed!");
            return StatusCode::UNAUTHORIZED;
        }
    }

    // Normalize the payload into the render snapshot
    let data = match TemplateData::from_webhook(event_name, &body) {
        Ok(data) => data,
        Err(e) => {
            warn!("Could not parse {} payload: {}", event_name, e);
            return StatusCode::BAD_REQUEST;
        }
    };

    // Render: operator override first, else the built-in templates
    let text = match templates::render(&data, state.config.template_override()) {
        Ok(text) => text,
        Err(NotifyError::NoTemplate { event, action }) => {
            info!("No template for event '{}' action '{}', skipping.", event, action);
            return StatusCode::NO_CONTENT;
        }
        Err(e) => {
            error!(
                "Rendering failed for {}:{}: {}",
                data.event_name, data.action, e
            );
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };

    info!(
        "Rendered {}:{} notification for {}#{}",
        data.event_name, data.action, data.repo.full_name, data.pr.number
    );

    match state.notifier.send_message(&text).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            error!("Delivery failed: {}", e);
            StatusCode::BAD_GATEWAY
        }
    }
}
