use crate::error::WatchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable holding the webhook endpoint
pub const WEBHOOK_ENV: &str = "DISCORD_WEBHOOK_URL";

/// Configuration for the page watcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatcherConfig {
    /// Page to poll
    #[serde(default = "default_url")]
    pub url: String,

    /// Phrases to look for; matched case-insensitively
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Seconds to sleep between cycles
    #[serde(default = "default_check_interval_secs")]
    pub check_interval_secs: u64,

    /// Timeout applied to both the page fetch and the webhook call
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User-Agent sent with the page fetch
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_url() -> String {
    "https://tkslok.pl/category/aktualnosci/".to_string()
}

fn default_keywords() -> Vec<String> {
    ["uprawnienia", "prowadzącego", "strzelanie", "kurs"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Six hours
fn default_check_interval_secs() -> u64 {
    21600
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; tkslok-watcher/1.0; +https://example.local)".to_string()
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            keywords: default_keywords(),
            check_interval_secs: default_check_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl WatcherConfig {
    /// Load configuration from a JSON file; absent fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WatchError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Check the invariants the poll loop relies on
    pub fn validate(&self) -> Result<(), WatchError> {
        Url::parse(&self.url)?;
        KeywordSet::new(self.keywords.iter().cloned())?;
        if self.check_interval_secs == 0 {
            return Err(WatchError::Config("check interval must be positive".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(WatchError::Config("request timeout must be positive".into()));
        }
        Ok(())
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn keyword_set(&self) -> Result<KeywordSet, WatchError> {
        KeywordSet::new(self.keywords.iter().cloned())
    }
}

/// Non-empty, immutable set of keywords, kept in lexicographic order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Result<Self, WatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = keywords.into_iter().map(Into::into).collect();
        if set.is_empty() {
            return Err(WatchError::Config("keyword list is empty".into()));
        }
        if set.iter().any(|kw| kw.trim().is_empty()) {
            return Err(WatchError::Config("keywords must not be blank".into()));
        }
        Ok(Self(set))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Resolve the webhook endpoint; an empty value counts as missing
pub fn resolve_webhook(raw: Option<&str>) -> Result<Url, WatchError> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(Url::parse(value)?),
        _ => Err(WatchError::MissingWebhook),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WatcherConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.check_interval(), Duration::from_secs(21600));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.keywords.len(), 4);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: WatcherConfig =
            serde_json::from_str(r#"{"keywords": ["kurs"], "check_interval_secs": 60}"#).unwrap();
        assert_eq!(config.keywords, vec!["kurs"]);
        assert_eq!(config.check_interval_secs, 60);
        assert_eq!(config.url, default_url());
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("page-watch-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"url": "https://example.com/"}"#).unwrap();
        let config = WatcherConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.url, "https://example.com/");
        assert_eq!(config.keywords, default_keywords());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty = WatcherConfig {
            keywords: vec![],
            ..WatcherConfig::default()
        };
        assert!(matches!(empty.validate(), Err(WatchError::Config(_))));

        let blank = WatcherConfig {
            keywords: vec!["kurs".into(), "  ".into()],
            ..WatcherConfig::default()
        };
        assert!(matches!(blank.validate(), Err(WatchError::Config(_))));

        let bad_url = WatcherConfig {
            url: "not a url".into(),
            ..WatcherConfig::default()
        };
        assert!(matches!(bad_url.validate(), Err(WatchError::InvalidUrl(_))));

        let zero_interval = WatcherConfig {
            check_interval_secs: 0,
            ..WatcherConfig::default()
        };
        assert!(zero_interval.validate().is_err());
    }

    #[test]
    fn test_keyword_set_dedups_and_sorts() {
        let set = KeywordSet::new(["strzelanie", "kurs", "kurs"]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["kurs", "strzelanie"]);
    }

    #[test]
    fn test_resolve_webhook() {
        assert!(matches!(resolve_webhook(None), Err(WatchError::MissingWebhook)));
        assert!(matches!(resolve_webhook(Some("")), Err(WatchError::MissingWebhook)));
        assert!(matches!(resolve_webhook(Some("   ")), Err(WatchError::MissingWebhook)));
        assert!(matches!(resolve_webhook(Some("nope")), Err(WatchError::InvalidUrl(_))));

        let url = resolve_webhook(Some("https://discord.com/api/webhooks/1/abc")).unwrap();
        assert_eq!(url.host_str(), Some("discord.com"));
    }
}
