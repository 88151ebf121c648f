//! Placeholder normalization
//!
//! Turns raw text into a text unit: native line breaks become placeholders,
//! doubled placeholders become paragraph markers and the remaining single
//! placeholders become spaces.

use crate::markers::{LINE_BREAK, PARAGRAPH};

/// Replace native line breaks (`\r\n`, `\n`, `\r`) with line-break placeholders.
///
/// `\r\n` counts as a single break.
pub fn linearize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(LINE_BREAK);
            }
            '\n' => out.push(LINE_BREAK),
            _ => out.push(ch),
        }
    }

    out
}

/// Normalize raw text into a text unit.
///
/// Two adjacent placeholders fold into one paragraph marker, scanning left
/// to right without overlap, before the single ones are replaced by a space.
/// Three breaks therefore yield a paragraph marker followed by a space.
pub fn normalize(raw: &str) -> String {
    let linear = linearize(raw);

    let mut out = String::with_capacity(linear.len());
    let mut chars = linear.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != LINE_BREAK {
            out.push(ch);
        } else if chars.peek() == Some(&LINE_BREAK) {
            chars.next();
            out.push(PARAGRAPH);
        } else {
            out.push(' ');
        }
    }

    log::trace!(
        "normalized {} bytes into {} bytes",
        raw.len(),
        out.len()
    );

    out
}
