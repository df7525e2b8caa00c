//! Query string construction

use crate::models::{QueryParams, QueryValue};
use tracing::debug;

/// Build `?k=v&k2=a&k2=b` from an ordered parameter map.
///
/// Lists use repeated keys; empty lists and empty list items are skipped.
/// Keys and values are percent-encoded. Returns an empty string when no pair
/// was produced.
pub fn construct_query_string(params: &QueryParams) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (key, value) in params {
        match value {
            QueryValue::Single(v) => parts.push(encode_pair(key, v)),
            QueryValue::Multiple(items) => {
                if items.is_empty() {
                    debug!("Skipping empty list for {}", key);
                    continue;
                }
                parts.extend(
                    items
                        .iter()
                        .filter(|item| !item.is_empty())
                        .map(|item| encode_pair(key, item)),
                );
            }
        }
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: Vec<(&str, QueryValue)>) -> QueryParams {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_repeated_keys() {
        let params = params(vec![
            ("Limit", "1000".into()),
            ("Offset", "0".into()),
            ("ShipmentNumbers", vec!["A1".to_string(), "A2".to_string()].into()),
        ]);
        assert_eq!(
            construct_query_string(&params),
            "?Limit=1000&Offset=0&ShipmentNumbers=A1&ShipmentNumbers=A2"
        );
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(construct_query_string(&QueryParams::new()), "");
    }

    #[test]
    fn test_empty_list_and_items_skipped() {
        let params = params(vec![
            ("Sizes", QueryValue::Multiple(vec![])),
            ("States", vec![String::new(), "Delivered".to_string()].into()),
        ]);
        assert_eq!(construct_query_string(&params), "?States=Delivered");
    }

    #[test]
    fn test_only_empty_list_gives_empty_string() {
        let params = params(vec![("Sizes", QueryValue::Multiple(vec![]))]);
        assert_eq!(construct_query_string(&params), "");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let params = params(vec![("City", "Hradec Králové".into()), ("note", "a&b=c".into())]);
        assert_eq!(
            construct_query_string(&params),
            "?City=Hradec%20Kr%C3%A1lov%C3%A9&note=a%26b%3Dc"
        );
    }
}
