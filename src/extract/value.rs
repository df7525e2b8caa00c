//! Scalar value extraction
//!
//! Flat, namespace-tolerant tag search over loosely formed XML text. Nesting
//! is not validated: a dotted path only contributes its last segment.

use regex::Regex;
use tracing::{debug, warn};

/// Order in which tag patterns are tried; the first hit wins
const STRATEGIES: [TagPattern; 3] = [
    TagPattern::AnyPrefix,
    TagPattern::V1Prefix,
    // Same as the first entry; kept so the lookup order stays exactly as documented
    TagPattern::AnyPrefix,
];

#[derive(Debug, Clone, Copy)]
enum TagPattern {
    /// `<Tag>` or `<ns:Tag ...>` with any prefix
    AnyPrefix,
    /// Only the fixed `v1:` alias
    V1Prefix,
}

impl TagPattern {
    fn build(self, tag: &str) -> String {
        let tag = regex::escape(tag);
        match self {
            TagPattern::AnyPrefix => format!(r"(?i)<(?:\w+:)?{tag}[^>]*>([^<]*)</(?:\w+:)?{tag}>"),
            TagPattern::V1Prefix => format!(r"(?i)<v1:{tag}[^>]*>([^<]*)</v1:{tag}>"),
        }
    }
}

/// Local tag name of a dotted path (`Filter.DateFrom` -> `DateFrom`)
pub(crate) fn local_name(path: &str) -> Option<&str> {
    path.rsplit('.').next().filter(|name| !name.is_empty())
}

/// Compile a pattern built from caller-supplied tag names.
///
/// A pattern that fails to build is treated like a miss so one bad name
/// never aborts the surrounding translation.
pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Skipping unusable extraction pattern {}: {}", pattern, e);
            None
        }
    }
}

/// Drop the first CDATA wrapper markers and surrounding whitespace
pub(crate) fn clean_text(raw: &str) -> String {
    raw.replacen("<![CDATA[", "", 1)
        .replacen("]]>", "", 1)
        .trim()
        .to_string()
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| clean_text(m.as_str()))
}

/// Find the text content of the first element whose local name matches the
/// last segment of `path`.
///
/// Returns `None` when no strategy matches. A match with empty content yields
/// `Some("")`; callers decide whether that counts as present.
pub fn extract_value(text: &str, path: &str) -> Option<String> {
    let tag = local_name(path)?;

    for strategy in STRATEGIES {
        let Some(re) = compile(&strategy.build(tag)) else {
            continue;
        };
        if let Some(value) = first_capture(&re, text) {
            debug!("Extracted {} via {:?}: {:?}", path, strategy, value);
            return Some(value);
        }
    }

    None
}

/// Find `child` inside the first block delimited by the `parent` element.
///
/// The parent block may span lines; the child is searched only inside the
/// block's inner text.
pub fn extract_nested_value(text: &str, parent_path: &str, child_path: &str) -> Option<String> {
    let parent = local_name(parent_path)?;
    let child = local_name(child_path)?;

    let parent_tag = regex::escape(parent);
    let parent_re = compile(&format!(
        r"(?is)<(?:\w+:)?{parent_tag}[^>]*>(.*?)</(?:\w+:)?{parent_tag}>"
    ))?;

    let block = parent_re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|inner| !inner.is_empty())?;

    let child_re = compile(&TagPattern::AnyPrefix.build(child))?;
    first_capture(&child_re, block)
}
