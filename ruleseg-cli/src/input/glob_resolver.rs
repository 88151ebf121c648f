//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use crate::error::CliError;

/// Resolve one pattern to the files it matches, sorted
pub fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.to_string()))?;

    let mut files = Vec::new();
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(pattern.to_string()).into());
    }

    files.sort();
    Ok(files)
}
