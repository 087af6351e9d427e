use crate::error::WatchError;
use crate::net::{Alert, Notifier};
use crate::results::format_matches;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use url::Url;

const EMBED_TITLE: &str = "Keywords detected";

/// JSON body accepted by a Discord webhook
#[derive(Debug, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    pub embeds: Vec<Embed>,
    pub allowed_mentions: AllowedMentions,
}

#[derive(Debug, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// `parse: []` stops Discord from expanding @everyone, roles or users
#[derive(Debug, Default, Serialize)]
pub struct AllowedMentions {
    pub parse: Vec<String>,
}

impl WebhookPayload {
    pub fn from_alert(alert: &Alert) -> Self {
        let keywords = format_matches(&alert.matches);
        let content = format!(
            "🔔 The following keywords appeared on the website: {}\n📄 **{}**\n🔗 {}",
            keywords, alert.title, alert.url
        );

        Self {
            content,
            embeds: vec![Embed {
                title: EMBED_TITLE.to_string(),
                description: keywords,
                url: alert.url.clone(),
            }],
            allowed_mentions: AllowedMentions::default(),
        }
    }
}

/// `Notifier` that posts to a Discord-compatible webhook
pub struct DiscordWebhook {
    client: Client,
    endpoint: Url,
}

impl DiscordWebhook {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, WatchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl Notifier for DiscordWebhook {
    async fn notify(&self, alert: &Alert) -> Result<(), WatchError> {
        let payload = WebhookPayload::from_alert(alert);
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            ::log::info!("A notification has been sent to Discord.");
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        let err = WatchError::Webhook {
            status: status.as_u16(),
            body,
        };
        ::log::error!("Error sending to Discord: {}", err);
        Err(err)
    }
}
