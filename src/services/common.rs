//! Helpers shared by the per-operation translators

use crate::extract::Extract;
use crate::models::rest::{
    FieldValue, SenderRecipient, DEFAULT_COUNTRY, MISSING_CITY, MISSING_NAME, MISSING_STREET,
    MISSING_ZIP_CODE, REQUIRED_IN_REST_API,
};
use crate::models::{QueryParams, QueryValue};
use tracing::{debug, warn};

/// Page size sent with every list query
pub const DEFAULT_LIMIT: u32 = 1000;
/// Page offset sent with every list query
pub const DEFAULT_OFFSET: u32 = 0;

/// Whether a party's phone and email must be present in the REST payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPolicy {
    /// Included only when the request has them
    Optional,
    /// Replaced by a placeholder when absent
    Required,
}

/// Read a `Sender`/`Recipient` block
pub fn read_party(source: &dyn Extract, block: &str, contacts: ContactPolicy) -> SenderRecipient {
    let required = |child: &str, fallback: &str| {
        FieldValue::or_default(source.nested_field(block, child), fallback)
    };

    let contact = |child: &str| {
        let value = source.nested_field(block, child);
        match contacts {
            ContactPolicy::Optional => value.map(FieldValue::Present),
            ContactPolicy::Required => {
                let field = FieldValue::or_default(value, REQUIRED_IN_REST_API);
                if field.is_defaulted() {
                    warn!(
                        "Missing mandatory {}.{}, it has to be supplied before calling the REST API",
                        block, child
                    );
                }
                Some(field)
            }
        }
    };

    SenderRecipient {
        name: required("Name", MISSING_NAME),
        street: required("Street", MISSING_STREET),
        city: required("City", MISSING_CITY),
        zip_code: required("ZipCode", MISSING_ZIP_CODE),
        country: required("Country", DEFAULT_COUNTRY),
        phone: contact("Phone"),
        email: contact("Email"),
        name2: source.nested_field(block, "Name2"),
        contact: source.nested_field(block, "Contact"),
    }
}

/// `Limit`/`Offset` baseline every list query starts from
pub fn paged_query_params() -> QueryParams {
    let mut params = QueryParams::new();
    params.insert("Limit".to_string(), QueryValue::Single(DEFAULT_LIMIT.to_string()));
    params.insert("Offset".to_string(), QueryValue::Single(DEFAULT_OFFSET.to_string()));
    params
}

/// Insert `value` under `key` when present
pub fn insert_scalar(params: &mut QueryParams, key: &str, value: Option<String>) {
    match value {
        Some(v) => {
            debug!("Query parameter {} = {}", key, v);
            params.insert(key.to_string(), QueryValue::Single(v));
        }
        None => debug!("No value for query parameter {}", key),
    }
}

/// Insert `values` under `key` when non-empty
pub fn insert_list(params: &mut QueryParams, key: &str, values: &[String]) {
    if values.is_empty() {
        debug!("No values for query parameter {}", key);
        return;
    }
    debug!("Query parameter {} = {:?}", key, values);
    params.insert(key.to_string(), QueryValue::Multiple(values.to_vec()));
}

/// Array form (`Parent.Plural`) followed by the single-element form
pub fn array_with_single(source: &dyn Extract, array_path: &str, single_path: &str) -> Vec<String> {
    let mut values = source.array_at(array_path);
    if let Some(single) = source.field(single_path) {
        values.push(single);
    }
    values
}

/// `true`/`1` and `false`/`0` (any case) become literal `"true"`/`"false"`;
/// anything else passes through unchanged
pub fn normalize_flag(value: String) -> String {
    if value.eq_ignore_ascii_case("true") || value == "1" {
        "true".to_string()
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        "false".to_string()
    } else {
        value
    }
}
