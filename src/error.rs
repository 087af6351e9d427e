use thiserror::Error;

/// Errors produced by a watcher stage or at startup
#[derive(Debug, Error)]
pub enum WatchError {
    /// Transport failure (connect, timeout, body decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The watched page answered with a non-2xx status
    #[error("page {url} returned HTTP {status}")]
    PageStatus { url: String, status: u16 },

    /// The webhook answered with a non-2xx status
    #[error("webhook returned HTTP {status} | response: {body}")]
    Webhook { status: u16, body: String },

    #[error("DISCORD_WEBHOOK_URL is not set")]
    MissingWebhook,

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
