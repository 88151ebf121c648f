//! Prefix-list resolver
//!
//! Decides periods the boundary rules leave alone (`arrived. He`) and undoes
//! breaks the rules placed after abbreviations, initials and dotted acronyms.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::loader::get_table;
use super::table::PrefixTable;
use super::NonBreaker;
use crate::config::NonBreakerConfig;
use crate::error::Result;
use crate::markers::{BREAK, PARAGRAPH};

/// A word ending in periods: stem, closing punctuation, periods
static CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\p{Alphabetic}\p{Nd}.\-]*)(['")\]%\p{Pf}]*)(\.+)$"#)
        .expect("candidate pattern must compile")
});

/// Dotted uppercase run at the end of a word (`U.S.`, `J.R.R.`)
static ACRONYM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.[\p{Lu}\-]+\.+$").expect("acronym pattern must compile")
});

/// Word that can open a sentence: optional opening punctuation, then an
/// uppercase letter or a digit
static NEXT_STARTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^['"(\[¿¡«\p{Pi}]*[\p{Lu}\p{Nd}]"#).expect("starter pattern must compile")
});

/// Word that begins with a decimal digit of any script
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}").expect("number pattern must compile"));

/// Resolver driven by a table of non-breaking prefixes
#[derive(Debug, Clone)]
pub struct PrefixNonBreaker {
    language: String,
    general: HashSet<String>,
    numeric_only: HashSet<String>,
}

impl PrefixNonBreaker {
    /// Build from a loaded table
    pub fn new(table: &PrefixTable) -> Self {
        Self {
            language: table.metadata.code.clone(),
            general: table.prefixes.general.iter().cloned().collect(),
            numeric_only: table.prefixes.numeric_only.iter().cloned().collect(),
        }
    }

    /// Build from an embedded table
    pub fn for_language(code: &str) -> Result<Self> {
        let table = get_table(code)?;
        Ok(Self::new(&table))
    }

    /// Build from configuration; an external table wins over the language code
    pub fn from_config(config: &NonBreakerConfig) -> Result<Self> {
        match &config.prefixes {
            Some(path) => Ok(Self::new(&PrefixTable::from_file(path, None)?)),
            None => Self::for_language(&config.language),
        }
    }

    /// Language code of the table this resolver was built from
    pub fn language(&self) -> &str {
        &self.language
    }

    fn is_non_breaking(&self, stem: &str) -> bool {
        self.general.contains(stem) || is_initial(stem)
    }

    fn is_numeric_only(&self, stem: &str) -> bool {
        self.numeric_only.contains(stem)
    }

    /// Should the break marker between `before` and `after` be dropped?
    fn joins(&self, before: &str, after: &str) -> bool {
        let head = before.trim_end_matches([' ', PARAGRAPH]);
        let Some(token) = head.rsplit(char::is_whitespace).next() else {
            return false;
        };
        let Some(caps) = CANDIDATE.captures(token) else {
            return false;
        };

        if !caps[2].is_empty() {
            return false;
        }

        let stem = &caps[1];
        if ACRONYM.is_match(token) || self.is_non_breaking(stem) {
            return true;
        }

        self.is_numeric_only(stem)
            && NUMBER.is_match(after.trim_start_matches([' ', PARAGRAPH]))
    }

    /// Should a break marker go between `word` and the next word `next`?
    fn breaks_between(&self, word: &str, next: &str) -> bool {
        let Some(caps) = CANDIDATE.captures(word) else {
            return false;
        };

        let stem = &caps[1];
        let closed = !caps[2].is_empty();

        if !closed && !stem.is_empty() && self.is_non_breaking(stem) {
            return false;
        }
        if ACRONYM.is_match(word) {
            return false;
        }
        if !NEXT_STARTER.is_match(next) {
            return false;
        }

        !(!closed && self.is_numeric_only(stem) && NUMBER.is_match(next))
    }

    /// Drop breaks that follow a non-terminal period
    fn suppress_breaks(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut removed = 0usize;
        let mut pieces = text.split(BREAK).peekable();

        while let Some(piece) = pieces.next() {
            out.push_str(piece);
            if let Some(next) = pieces.peek() {
                if self.joins(piece, next) {
                    removed += 1;
                } else {
                    out.push(BREAK);
                }
            }
        }

        if removed > 0 {
            log::trace!("{}: suppressed {removed} break(s)", self.language);
        }
        out
    }

    /// Add breaks after sentence-final periods followed by a starter
    fn insert_breaks(&self, text: &str) -> String {
        let words: Vec<&str> = text.split(' ').collect();
        let mut break_before = vec![false; words.len()];

        // Runs of spaces leave empty words; pair each word with the previous non-empty one
        let mut previous: Option<&str> = None;
        for (i, word) in words.iter().enumerate().filter(|(_, w)| !w.is_empty()) {
            if let Some(prev) = previous {
                break_before[i] = self.breaks_between(prev, word);
            }
            previous = Some(*word);
        }

        let inserted = break_before.iter().filter(|b| **b).count();
        if inserted == 0 {
            return text.to_string();
        }
        log::trace!("{}: inserted {inserted} break(s)", self.language);

        let mut out = String::with_capacity(text.len() + inserted);
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            if break_before[i] {
                out.push(BREAK);
            }
            out.push_str(word);
        }
        out
    }
}

impl NonBreaker for PrefixNonBreaker {
    fn resolve(&self, text: String) -> String {
        let text = self.suppress_breaks(&text);
        self.insert_breaks(&text)
    }
}

/// A single uppercase letter, as in `J. Smith`
fn is_initial(stem: &str) -> bool {
    let mut chars = stem.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}
