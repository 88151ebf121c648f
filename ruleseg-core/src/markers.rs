//! Internal markers and punctuation classes shared by the pipeline stages
//!
//! Markers are single characters so that the punctuation classes below can
//! never overlap with them. Raw input is expected to carry native line
//! breaks only; U+2028 and U+2029 found in raw input are treated as the
//! markers they stand for.

/// A single line break from the original input
pub const LINE_BREAK: char = '\u{2028}';

/// Two consecutive line breaks from the original input (paragraph candidate)
pub const PARAGRAPH: char = '\u{2029}';

/// Confirmed sentence boundary
pub const BREAK: char = '\n';

/// Opening quotes and brackets that may precede a sentence starter.
///
/// Written as the body of a regex character class.
pub(crate) const OPENING: &str =
    "'\"(\\[¿¡«<\u{0091}\u{0093}\u{201B}\u{201C}\u{201F}\u{2018}\u{2039}";

/// Closing quotes and brackets that may follow terminal punctuation.
///
/// Written as the body of a regex character class.
pub(crate) const CLOSING: &str = "'\")\\]%»=\u{0092}\u{0094}\u{201D}\u{203A}\u{2019}";

/// Sentence-ending punctuation, as a regex character class body
pub(crate) const TERMINAL: &str = "?!.";
