//! API module for all HTTP handlers

pub mod webhook;

// Re-export handlers
pub use webhook::{handle_webhook, root};
