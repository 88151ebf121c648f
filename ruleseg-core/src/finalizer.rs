//! Paragraph finalization and the final split

use std::sync::LazyLock;

use regex::Regex;

use crate::config::EmptySegments;
use crate::markers::{BREAK, PARAGRAPH};

/// A paragraph marker followed by a lowercase letter was a mid-sentence line
/// wrap, not a paragraph.
static SPURIOUS_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{PARAGRAPH}([^\\S\\n{PARAGRAPH}]*\\p{{Lowercase}})"))
        .expect("spurious paragraph pattern must compile")
});

/// A run of paragraph markers, absorbing a break marker the rule engine
/// already placed after it (possibly behind some spaces).
static PARAGRAPHS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{PARAGRAPH}+(?:([^\\S\\n{PARAGRAPH}]*){BREAK})?"
    ))
    .expect("paragraph pattern must compile")
});

/// Drop spurious paragraph markers and turn the rest into break markers
pub fn resolve_paragraphs(text: &str) -> String {
    let text = SPURIOUS_PARAGRAPH.replace_all(text, "  ${1}");
    PARAGRAPHS
        .replace_all(&text, format!("{BREAK}${{1}}").as_str())
        .into_owned()
}

/// Split a finalized text unit on break markers
pub fn split(text: &str, policy: EmptySegments) -> Vec<String> {
    let segments = text.split(BREAK).map(str::to_string).collect();
    policy.apply(segments)
}

/// Resolve paragraphs and split into sentences
pub fn finalize(text: &str, policy: EmptySegments) -> Vec<String> {
    let sentences = split(&resolve_paragraphs(text), policy);
    log::debug!("finalized into {} sentence(s)", sentences.len());
    sentences
}
