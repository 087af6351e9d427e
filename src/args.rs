use clap::Parser;
use page_watch::config::{WEBHOOK_ENV, WatcherConfig};
use page_watch::error::WatchError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-watch")]
#[command(about = "Polls a web page and posts to a Discord webhook when keywords appear")]
#[command(version)]
pub struct Args {
    /// JSON file with watcher settings; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page to watch
    #[arg(short, long)]
    pub url: Option<String>,

    /// Keyword to look for (repeatable; replaces the configured list)
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Seconds between checks
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// HTTP timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Webhook endpoint
    #[arg(long, env = WEBHOOK_ENV, hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Run a single check and exit
    #[arg(long)]
    pub once: bool,
}

impl Args {
    /// Build the watcher configuration from the optional file and the flags
    pub fn watcher_config(&self) -> Result<WatcherConfig, WatchError> {
        let mut config = match &self.config {
            Some(path) => WatcherConfig::from_file(path)?,
            None => WatcherConfig::default(),
        };

        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if !self.keywords.is_empty() {
            config.keywords = self.keywords.clone();
        }
        if let Some(interval) = self.interval {
            config.check_interval_secs = interval;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}
