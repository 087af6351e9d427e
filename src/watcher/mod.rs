//! Poll loop: fetch, match, fingerprint, compare, notify, sleep.


use crate::config::KeywordSet;
use crate::error::WatchError;
use crate::fingerprint::{Fingerprint, generate_fingerprint};
use crate::matcher::find_matches;
use crate::net::{Alert, Notifier, PageSource};
use crate::parsers;
use crate::results::{CycleOutcome, format_matches};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// State carried between cycles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatcherState {
    /// Fingerprint of the last content the notifier accepted
    pub last_fingerprint: Option<Fingerprint>,
}

/// Drives the watch cycle against a page source and a notifier
pub struct Watcher<S, N> {
    url: String,
    keywords: KeywordSet,
    interval: Duration,
    source: S,
    notifier: N,
    state: WatcherState,
}

impl<S: PageSource, N: Notifier> Watcher<S, N> {
    pub fn new(
        url: impl Into<String>,
        keywords: KeywordSet,
        interval: Duration,
        source: S,
        notifier: N,
    ) -> Self {
        Self {
            url: url.into(),
            keywords,
            interval,
            source,
            notifier,
            state: WatcherState::default(),
        }
    }

    /// Start from a given state instead of an empty one
    pub fn with_state(mut self, state: WatcherState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &WatcherState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run one cycle.
    ///
    /// The stored fingerprint only moves forward when the notifier succeeds,
    /// so a failed delivery is attempted again on the next cycle.
    pub async fn check(&mut self) -> Result<CycleOutcome, WatchError> {
        let html = self.source.fetch(&self.url).await?;
        let page = parsers::extract(&html, &self.url);

        let matches = find_matches(&page.text, &self.keywords);
        if matches.is_empty() {
            return Ok(CycleOutcome::NoMatch);
        }

        let fingerprint = generate_fingerprint(&page.text, &matches);
        if self.state.last_fingerprint.as_ref() == Some(&fingerprint) {
            return Ok(CycleOutcome::Unchanged(matches));
        }

        ::log::info!("Matches found: {} (new content)", format_matches(&matches));
        let alert = Alert {
            title: page.title,
            url: self.url.clone(),
            matches,
        };
        self.notifier.notify(&alert).await?;

        ::log::debug!("Stored fingerprint {}", fingerprint);
        self.state.last_fingerprint = Some(fingerprint);
        Ok(CycleOutcome::Notified(alert.matches))
    }

    /// Run one cycle and log how it ended; errors never escape
    pub async fn tick(&mut self) -> Option<CycleOutcome> {
        match self.check().await {
            Ok(outcome) => {
                match &outcome {
                    CycleOutcome::NoMatch => ::log::info!("No matches found."),
                    CycleOutcome::Unchanged(_) => {
                        ::log::info!("No changes to the match, notification skipped")
                    }
                    CycleOutcome::Notified(_) => {}
                }
                Some(outcome)
            }
            Err(WatchError::Webhook { .. }) => {
                ::log::warn!("Alert not delivered, retrying next cycle");
                None
            }
            Err(e) => {
                ::log::error!("Error while checking the page: {:?}", e);
                None
            }
        }
    }

    /// Poll until `shutdown` is cancelled.
    ///
    /// Cancellation is only observed while sleeping; a cycle in progress
    /// always completes.
    pub async fn run(&mut self, shutdown: CancellationToken) {
        ::log::info!(
            "Start of watcher: {} | keywords: {}",
            self.url,
            self.keywords.iter().collect::<Vec<_>>().join(", ")
        );

        loop {
            self.tick().await;

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        ::log::info!("Watcher stopped");
    }
}
