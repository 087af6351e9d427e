use crate::config::KeywordSet;
use crate::results::MatchSet;

/// Returns the keywords that occur in `text`, ignoring case.
///
/// Plain substring containment: `kurs` also matches inside `kursant`.
pub fn find_matches(text: &str, keywords: &KeywordSet) -> MatchSet {
    let text_lower = text.to_lowercase();
    keywords
        .iter()
        .filter(|kw| text_lower.contains(&kw.to_lowercase()))
        .map(String::from)
        .collect()
}
