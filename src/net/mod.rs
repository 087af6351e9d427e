//! Outbound HTTP: fetching the watched page and posting alerts.

pub mod fetch;
pub mod webhook;


pub use fetch::HttpFetcher;
pub use webhook::DiscordWebhook;

use crate::error::WatchError;
use crate::results::MatchSet;
use async_trait::async_trait;

/// Source of raw page markup
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch `url` and return its body; non-2xx statuses are errors
    async fn fetch(&self, url: &str) -> Result<String, WatchError>;
}

/// Everything a notifier needs to describe a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub url: String,
    pub matches: MatchSet,
}

/// Destination for alerts
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver the alert; `Ok` only when the destination accepted it
    async fn notify(&self, alert: &Alert) -> Result<(), WatchError>;
}
