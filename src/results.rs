use std::collections::BTreeSet;

/// Keywords found on a page; `BTreeSet` keeps them in display order
pub type MatchSet = BTreeSet<String>;

/// Text and title extracted from one fetch of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Non-empty trimmed lines joined with `\n`
    pub text: String,

    /// Page title, or the source URL when the page has none
    pub title: String,
}

impl PageSnapshot {
    pub fn new(text: String, title: String) -> Self {
        Self { text, title }
    }
}

/// How a single poll cycle ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No configured keyword on the page
    NoMatch,
    /// Keywords found but their surroundings match the last notification
    Unchanged(MatchSet),
    /// Keywords found in new content and the webhook accepted the alert
    Notified(MatchSet),
}

/// Join matched keywords for display, e.g. `kurs, strzelanie`
pub fn format_matches(matches: &MatchSet) -> String {
    matches.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}
