//! Embedded abbreviation tables
//!
//! Tables ship inside the binary and are parsed once, on first access.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::table::PrefixTable;
use crate::error::{ConfigError, Result};

static EMBEDDED: OnceLock<HashMap<String, Arc<PrefixTable>>> = OnceLock::new();

macro_rules! embed_table {
    ($code:expr, $alias:expr, $path:expr) => {
        ($code, $alias, include_str!($path))
    };
}

fn load_embedded() -> HashMap<String, Arc<PrefixTable>> {
    let sources = [
        embed_table!("en", "english", "../../configs/languages/english.toml"),
        embed_table!("es", "spanish", "../../configs/languages/spanish.toml"),
        embed_table!("eu", "basque", "../../configs/languages/basque.toml"),
    ];

    let mut map = HashMap::new();

    for (code, alias, source) in sources {
        match PrefixTable::from_toml(source, &format!("embedded '{code}' table")) {
            Ok(table) if table.metadata.code == code => {
                let table = Arc::new(table);
                map.insert(code.to_string(), table.clone());
                map.insert(alias.to_string(), table);
            }
            Ok(table) => {
                log::warn!(
                    "embedded table code mismatch: expected {code}, got {}",
                    table.metadata.code
                );
            }
            Err(e) => {
                log::warn!("failed to load embedded '{code}' table: {e}");
            }
        }
    }

    map
}

/// Look up an embedded table by language code or English name
pub fn get_table(code: &str) -> Result<Arc<PrefixTable>> {
    EMBEDDED
        .get_or_init(load_embedded)
        .get(&code.to_lowercase())
        .cloned()
        .ok_or_else(|| ConfigError::UnsupportedLanguage(code.to_string()))
}

/// Codes of the embedded tables, sorted
pub fn list_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = EMBEDDED
        .get_or_init(load_embedded)
        .iter()
        .filter(|(key, table)| *key == &table.metadata.code)
        .map(|(key, _)| key.as_str())
        .collect();
    codes.sort_unstable();
    codes
}
