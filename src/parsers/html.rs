use crate::results::PageSnapshot;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Elements whose text is never shown to a reader
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript"];

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid title selector"));

static NON_CONTENT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&NON_CONTENT_TAGS.join(", ")).expect("valid non-content selector")
});

/// Parses HTML into normalized text and a title.
///
/// The title is the trimmed text of the first `<title>`; when that is missing
/// or blank, `source` (usually the page URL) is used instead. Script, style
/// and noscript elements are dropped before text extraction. Every text node
/// becomes its own line; lines are trimmed and blank ones removed.
pub fn extract(html: &str, source: &str) -> PageSnapshot {
    let mut doc = Html::parse_document(html);

    let title = doc
        .select(&TITLE_SELECTOR)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| source.to_string());

    remove_non_content(&mut doc);

    let text = doc
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join("\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    ::log::debug!("Extracted {} bytes of text from {}", text.len(), source);

    PageSnapshot::new(text, title)
}

/// Detaches script/style/noscript subtrees from the document
fn remove_non_content(doc: &mut Html) {
    let ids: Vec<_> = doc.select(&NON_CONTENT_SELECTOR).map(|e| e.id()).collect();
    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}
