//! Extraction module
//!
//! Best-effort value lookup over legacy request text. Translators only see
//! the [`Extract`] trait, so the tolerant pattern matching behind it can be
//! swapped for a tree walk without touching them.

pub mod array;
pub mod value;

pub use array::extract_array_values;
pub use value::{extract_nested_value, extract_value};

/// Read access to one legacy request
pub trait Extract {
    /// The raw request text
    fn raw(&self) -> &str;

    /// Text of the first element named like the last segment of `path`
    fn value_at(&self, path: &str) -> Option<String>;

    /// Text of `child` inside the first `parent` block
    fn nested_value_at(&self, parent: &str, child: &str) -> Option<String>;

    /// Repeated `<string>` items under `Parent.Child`
    fn array_at(&self, path: &str) -> Vec<String>;

    /// Like [`Extract::value_at`], but an empty element counts as absent
    fn field(&self, path: &str) -> Option<String> {
        self.value_at(path).filter(|v| !v.is_empty())
    }

    /// Like [`Extract::nested_value_at`], but an empty element counts as absent
    fn nested_field(&self, parent: &str, child: &str) -> Option<String> {
        self.nested_value_at(parent, child).filter(|v| !v.is_empty())
    }
}

/// Legacy request text searched with namespace-tolerant patterns
#[derive(Debug, Clone, Copy)]
pub struct LegacyXml<'a> {
    text: &'a str,
}

impl<'a> LegacyXml<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Extract for LegacyXml<'_> {
    fn raw(&self) -> &str {
        self.text
    }

    fn value_at(&self, path: &str) -> Option<String> {
        extract_value(self.text, path)
    }

    fn nested_value_at(&self, parent: &str, child: &str) -> Option<String> {
        extract_nested_value(self.text, parent, child)
    }

    fn array_at(&self, path: &str) -> Vec<String> {
        extract_array_values(self.text, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_is_not_a_field() {
        let xml = LegacyXml::new("<Note></Note><Sender><Name> </Name></Sender>");
        assert_eq!(xml.value_at("Note"), Some(String::new()));
        assert_eq!(xml.field("Note"), None);
        assert_eq!(xml.nested_field("Sender", "Name"), None);
    }
}
