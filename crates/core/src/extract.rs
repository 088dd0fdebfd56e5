//! HTML markup stripping.
//!
//! Parses HTML and extracts the visible text, skipping elements that never
//! contribute page content (scripts, styles, metadata, page chrome).
//! Parsing is html5ever-based and best-effort: malformed input yields
//! whatever text can be recovered, never an error.

use scraper::{Html, Node};

/// Elements whose entire subtree is excluded from text extraction.
const EXCLUDED_TAGS: &[&str] = &["script", "style", "meta", "noscript", "header", "footer"];

/// Extracts the visible text of an HTML document.
///
/// Text nodes with an ancestor in [`EXCLUDED_TAGS`] (at any depth) are
/// skipped. Chunks are joined with single spaces; the tokenizer normalizes
/// whitespace further downstream.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();

    for node in document.root_element().descendants() {
        if let Node::Text(chunk) = node.value() {
            let excluded = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(element) => EXCLUDED_TAGS.contains(&element.name()),
                _ => false,
            });
            if !excluded {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(chunk);
            }
        }
    }

    text
}
