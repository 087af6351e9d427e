// Re-export modules
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod matcher;
pub mod net;
pub mod parsers;
pub mod results;
pub mod watcher;

// Re-export commonly used types for convenience
pub use config::{KeywordSet, WatcherConfig};
pub use error::WatchError;
pub use fingerprint::Fingerprint;
pub use results::{CycleOutcome, MatchSet, PageSnapshot};
pub use watcher::{Watcher, WatcherState};
