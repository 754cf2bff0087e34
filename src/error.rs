/// Custom error type for pr-notify operations
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("no template for event {event} action {action:?}")]
    NoTemplate { event: String, action: String },

    #[error("parsing template: {0}")]
    TemplateParse(#[source] minijinja::Error),

    #[error("executing template: {0}")]
    TemplateExecute(#[source] minijinja::Error),

    #[error("Invalid webhook payload: {0}")]
    PayloadParse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Telegram delivery failed: {0}")]
    Delivery(String),
}

/// Helper type for Results that use NotifyError
pub type Result<T> = std::result::Result<T, NotifyError>;
