use crate::results::MatchSet;
use sha2::{Digest, Sha256};
use std::fmt;

/// Characters of context kept on each side of a keyword's first occurrence
pub const WINDOW_CHARS: usize = 1000;

/// SHA-256 digest (lowercase hex) of the text surrounding matched keywords
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a fingerprint of the content around each matched keyword.
///
/// Only windows around the first occurrence of every keyword are hashed, so
/// churn elsewhere on the page does not produce a new fingerprint. Keywords
/// are visited in sorted order; for each one the lowercased keyword and its
/// window are appended, and all fragments are joined with `\n`.
pub fn generate_fingerprint(text: &str, matches: &MatchSet) -> Fingerprint {
    let text_lower = text.to_lowercase();
    let mut parts: Vec<&str> = Vec::with_capacity(matches.len() * 2);
    let lowered: Vec<String> = matches.iter().map(|kw| kw.to_lowercase()).collect();

    for kw in &lowered {
        if let Some(start) = text_lower.find(kw.as_str()) {
            parts.push(kw);
            parts.push(window(&text_lower, start, start + kw.len(), WINDOW_CHARS));
        }
    }

    let mut hasher = Sha256::new();
    hasher.update(parts.join("\n").as_bytes());
    Fingerprint(format!("{:x}", hasher.finalize()))
}

/// Slice of `text` spanning `radius` chars before `start` and after `end`,
/// clamped to the text bounds. Offsets are byte positions on char boundaries.
fn window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}
