//! Logging utilities
//!
//! Shared logging configuration and helper functions

use crate::models::RestCallDescriptor;

/// Set to true to include full request bodies and payloads in debug logs
/// Default is false to reduce log verbosity
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let head: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", head, s.chars().count() - max_len)
    } else {
        s.to_string()
    }
}

/// One-line preview of incoming legacy request text
pub fn create_input_log_summary(text: &str) -> String {
    if VERBOSE_REQUEST_LOGGING {
        text.to_string()
    } else {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        truncate_content(&collapsed, 200)
    }
}

/// Create a filtered summary of a descriptor for logging
/// Keeps the call shape but drops the payload unless verbose logging is on
pub fn create_descriptor_log_summary(descriptor: &RestCallDescriptor) -> serde_json::Value {
    match descriptor {
        RestCallDescriptor::Failure { error } => serde_json::json!({
            "success": false,
            "error": truncate_content(error, 200),
        }),
        RestCallDescriptor::Call(call) => {
            let body = match &call.body {
                None => serde_json::Value::Null,
                Some(body) if VERBOSE_REQUEST_LOGGING => body.clone(),
                Some(body) => {
                    let keys = body
                        .as_object()
                        .map(|obj| obj.keys().cloned().collect::<Vec<_>>().join(", "))
                        .unwrap_or_default();
                    serde_json::json!(format!("{{{}}}", keys))
                }
            };

            serde_json::json!({
                "success": true,
                "operation": call.operation.as_str(),
                "method": call.method.as_str(),
                "path": call.path,
                "query_params": call.query_params.as_ref().map(|p| p.len()).unwrap_or(0),
                "body": body,
                "notes": call.notes.len(),
            })
        }
    }
}
