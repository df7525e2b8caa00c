//! Repeated-value extraction
//!
//! Reads `ArrayOfstring`-style lists such as
//! `<v1:Filter><v1:PackNumbers><arr:string>A</arr:string>...</v1:PackNumbers></v1:Filter>`.

use super::value::compile;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

static STRING_ITEM: Lazy<Option<Regex>> =
    Lazy::new(|| compile(r"(?i)<(?:arr:)?string[^>]*>(.*?)</(?:arr:)?string>"));

/// Collect the `<string>` items under `Parent.Child`.
///
/// Items containing commas are split into separate entries; empty items are
/// dropped. Returns an empty list when the path is malformed or the block is
/// not present.
pub fn extract_array_values(text: &str, path: &str) -> Vec<String> {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() < 2 {
        warn!("Array path needs a parent and a child segment: {}", path);
        return Vec::new();
    }

    let parent = regex::escape(parts[0]);
    let child = regex::escape(parts[1]);
    let Some(block_re) = compile(&format!(
        r"(?is)<(?:v1:)?{parent}[^>]*>.*?<(?:v1:)?{child}[^>]*>(.*?)</(?:v1:)?{child}>.*?</(?:v1:)?{parent}>"
    )) else {
        return Vec::new();
    };

    let Some(content) = block_re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|inner| !inner.is_empty())
    else {
        debug!("No array block found for {}", path);
        return Vec::new();
    };

    let Some(item_re) = STRING_ITEM.as_ref() else {
        return Vec::new();
    };

    let mut values = Vec::new();
    for caps in item_re.captures_iter(content) {
        let value = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        if value.is_empty() {
            continue;
        }
        if value.contains(',') {
            values.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_string),
            );
        } else {
            values.push(value.to_string());
        }
    }

    debug!("Extracted {} values for {}", values.len(), path);
    values
}
