//! Legacy operation detection
//!
//! Looks for each operation's root start-tag, prefix-tolerant and
//! case-insensitive, in priority order.

use crate::models::LegacyOperation;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static ROOT_TAGS: Lazy<Vec<(LegacyOperation, Regex)>> = Lazy::new(|| {
    LegacyOperation::ALL
        .iter()
        .filter_map(|op| {
            let pattern = format!(r"(?i)<\s*(?:\w+:)?{}[^>]*>", regex::escape(op.as_str()));
            crate::extract::value::compile(&pattern).map(|re| (*op, re))
        })
        .collect()
});

/// First operation whose root tag appears in `text`
pub fn detect_operation(text: &str) -> Option<LegacyOperation> {
    let detected = ROOT_TAGS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(op, _)| *op);
    debug!("Detected operation: {:?}", detected);
    detected
}
