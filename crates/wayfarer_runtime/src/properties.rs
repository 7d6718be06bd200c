//! Configuration files.
//!
//! A configuration file is TOML. Nested tables are flattened into dotted
//! keys, so these two files are equivalent:
//!
//! ```toml
//! message.prompt = "? "
//! ```
//!
//! ```toml
//! [message]
//! prompt = "? "
//! ```
//!
//! Every scalar becomes a string; [`Config::from_table`] then reads each
//! value as its key's type.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use wayfarer_foundation::{Config, Error, Result};

/// One value of a configuration file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Setting {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Section(BTreeMap<String, Setting>),
}

/// Parses TOML text into a flat key/value table.
///
/// # Errors
///
/// Returns `InvalidConfig` if the text is not TOML or holds a value that is
/// neither a scalar nor a table.
pub fn parse_table(source: &str) -> Result<BTreeMap<String, String>> {
    let root: BTreeMap<String, Setting> =
        toml::from_str(source).map_err(|e| Error::invalid_config("toml", e.message().trim()))?;

    let mut table = BTreeMap::new();
    for (key, setting) in root {
        flatten(key, setting, &mut table);
    }
    Ok(table)
}

/// Reads a flat key/value table from a TOML file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `InvalidConfig` if it cannot
/// be parsed; both name the file.
pub fn load_table(path: &Path) -> Result<BTreeMap<String, String>> {
    let origin = path.display().to_string();
    let source = fs::read_to_string(path).map_err(|e| Error::io(e).with_origin(&origin))?;
    let table = parse_table(&source).map_err(|e| e.with_origin(&origin))?;
    log::debug!("loaded {} configuration entries from {origin}", table.len());
    Ok(table)
}

/// Builds a [`Config`] from the defaults plus the TOML file at `path`.
///
/// # Errors
///
/// See [`load_table`] and [`Config::from_table`].
pub fn load_config(path: &Path) -> Result<Config> {
    let table = load_table(path)?;
    Config::from_table(table.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .map_err(|e| e.with_origin(path.display().to_string()))
}

fn flatten(key: String, setting: Setting, table: &mut BTreeMap<String, String>) {
    let value = match setting {
        Setting::Flag(flag) => flag.to_string(),
        Setting::Integer(n) => n.to_string(),
        Setting::Float(x) => x.to_string(),
        Setting::Text(text) => text,
        Setting::Section(section) => {
            for (child, setting) in section {
                flatten(format!("{key}.{child}"), setting, table);
            }
            return;
        }
    };
    table.insert(key, value);
}
