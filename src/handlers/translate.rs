//! Translation handlers
//!
//! POST /v1/translate and GET /v1/operations

use crate::handlers::AppState;
use crate::models::{HttpMethod, LegacyOperation, Note, RestCallDescriptor};
use crate::utils::error::AppResult;
use crate::utils::logging::create_input_log_summary;
use axum::{
    extract::{rejection::StringRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

const BODY_TO_QUERY_HINT: &str = "The REST request body is empty (`null`) for this GET operation. \
Input data from the original SOAP request's body has been converted into parameters directly in \
the REST endpoint's URL (query parameters).";

/// Descriptor plus the fields the host adds on top of it
#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    #[serde(flatten)]
    pub descriptor: RestCallDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Note>,
}

/// One row of the operation catalogue
#[derive(Debug, Serialize, Deserialize)]
pub struct OperationInfo {
    pub operation: String,
    pub method: HttpMethod,
    pub path: String,
}

/// Host-side notes about the translated call
pub fn hints_for(descriptor: &RestCallDescriptor) -> Vec<Note> {
    match descriptor.call() {
        Some(call) if call.method == HttpMethod::Get && call.body.is_none() => {
            vec![Note::info("body", BODY_TO_QUERY_HINT)]
        }
        _ => Vec::new(),
    }
}

/// POST /v1/translate
///
/// The raw legacy request is the body; answers 422 when translation fails
/// and 413 when the body exceeds the configured input size
pub async fn handle_translate(
    State(state): State<Arc<AppState>>,
    body: Result<String, StringRejection>,
) -> AppResult<Response> {
    let body = body?;
    debug!("Received translation request: {}", create_input_log_summary(&body));

    let descriptor = state.translator.translate(&body);
    let url = descriptor.call().map(|call| state.translator.full_url(call));
    let hints = hints_for(&descriptor);

    let status = if descriptor.is_success() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    Ok((
        status,
        Json(TranslationResponse {
            descriptor,
            url,
            hints,
        }),
    )
        .into_response())
}

/// GET /v1/operations
pub async fn list_operations() -> Json<Vec<OperationInfo>> {
    Json(
        LegacyOperation::ALL
            .iter()
            .map(|op| OperationInfo {
                operation: op.as_str().to_string(),
                method: op.rest_method(),
                path: op.rest_path().to_string(),
            })
            .collect(),
    )
}
