//! REST call descriptor
//!
//! The translator's output: either a fully populated REST call or a failure
//! carrying a human-readable error.

use crate::models::legacy::LegacyOperation;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// HTTP method of the target REST call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of an advisory note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Warning,
    Info,
}

/// Advisory annotation attached to a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Legacy parameter the note is about
    pub parameter: String,
    pub message: String,
}

impl Note {
    pub fn warning(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoteKind::Warning,
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    pub fn info(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoteKind::Info,
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}

/// A query parameter value: one scalar or a repeated-key list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Multiple(values)
    }
}

/// Ordered query parameter map; insertion order is serialization order
pub type QueryParams = IndexMap<String, QueryValue>;

/// Successfully translated REST call
#[derive(Debug, Clone, PartialEq)]
pub struct RestCall {
    pub operation: LegacyOperation,
    pub method: HttpMethod,
    pub path: String,
    /// Only set for calls that carry query-based identifiers or filters
    pub query_params: Option<QueryParams>,
    /// `None` exactly when the call has no request payload
    pub body: Option<serde_json::Value>,
    pub notes: Vec<Note>,
}

impl RestCall {
    pub fn new(operation: LegacyOperation, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            operation,
            method,
            path: path.into(),
            query_params: None,
            body: None,
            notes: Vec::new(),
        }
    }

    pub fn with_query_params(mut self, params: QueryParams) -> Self {
        self.query_params = Some(params);
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }
}

/// Result of translating one legacy request
#[derive(Debug, Clone, PartialEq)]
pub enum RestCallDescriptor {
    Call(RestCall),
    Failure { error: String },
}

impl RestCallDescriptor {
    pub fn failure(error: impl Into<String>) -> Self {
        RestCallDescriptor::Failure { error: error.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RestCallDescriptor::Call(_))
    }

    pub fn call(&self) -> Option<&RestCall> {
        match self {
            RestCallDescriptor::Call(call) => Some(call),
            RestCallDescriptor::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RestCallDescriptor::Call(_) => None,
            RestCallDescriptor::Failure { error } => Some(error),
        }
    }
}

impl From<RestCall> for RestCallDescriptor {
    fn from(call: RestCall) -> Self {
        RestCallDescriptor::Call(call)
    }
}

impl Serialize for RestCallDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RestCallDescriptor::Failure { error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                map.end()
            }
            RestCallDescriptor::Call(call) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("operation", call.operation.as_str())?;
                map.serialize_entry("method", &call.method)?;
                map.serialize_entry("path", &call.path)?;
                if let Some(params) = &call.query_params {
                    map.serialize_entry("queryParams", params)?;
                }
                map.serialize_entry("body", &call.body)?;
                if !call.notes.is_empty() {
                    map.serialize_entry("notes", &call.notes)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_serializes_only_error() {
        let descriptor = RestCallDescriptor::failure("nope");
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({"success": false, "error": "nope"})
        );
    }

    #[test]
    fn test_get_call_serializes_null_body() {
        let mut params = QueryParams::new();
        params.insert("Limit".to_string(), "1000".into());
        params.insert("Sizes".to_string(), vec!["S".to_string(), "M".to_string()].into());

        let descriptor: RestCallDescriptor =
            RestCall::new(LegacyOperation::GetParcelShops, HttpMethod::Get, "/accessPoint")
                .with_query_params(params)
                .into();

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["operation"], "GetParcelShops");
        assert_eq!(value["method"], "GET");
        assert!(value["body"].is_null());
        assert_eq!(value["queryParams"]["Sizes"], json!(["S", "M"]));
        assert!(value.get("notes").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_note_uses_type_key() {
        let note = Note::warning("SubjectId", "ignored");
        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            json!({"type": "warning", "parameter": "SubjectId", "message": "ignored"})
        );
    }
}
