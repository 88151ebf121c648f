//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_pattern;

use anyhow::Result;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// Pattern that selects standard input
pub const STDIN_PATTERN: &str = "-";

/// One document to segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Read the whole document
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_text(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve command-line inputs in the order given; `-` stands for standard input
///
/// Standard input and each file appear once, at their first mention.
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();
    let mut seen = HashSet::new();
    let mut stdin_taken = false;

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            if !stdin_taken {
                stdin_taken = true;
                sources.push(InputSource::Stdin);
            }
            continue;
        }

        for path in resolve_pattern(pattern)? {
            if seen.insert(path.clone()) {
                sources.push(InputSource::File(path));
            }
        }
    }

    Ok(sources)
}
