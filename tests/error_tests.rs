//! Error handling module tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use ppl_soap_translator::utils::error::helpers::*;
use ppl_soap_translator::utils::error::*;

#[test]
fn test_app_error_status_codes() {
    let test_cases = vec![
        (AppError::Validation("test".to_string()), StatusCode::UNPROCESSABLE_ENTITY),
        (AppError::MissingField("test".to_string()), StatusCode::UNPROCESSABLE_ENTITY),
        (AppError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE),
        (AppError::Translation("test".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected_status) in test_cases {
        assert_eq!(error.status_code(), expected_status);
    }
}

#[test]
fn test_app_error_types() {
    let test_cases = vec![
        (AppError::Validation("test".to_string()), "invalid_request_error"),
        (AppError::MissingField("test".to_string()), "missing_field_error"),
        (AppError::PayloadTooLarge, "invalid_request_error"),
        (AppError::Translation("test".to_string()), "translation_error"),
    ];

    for (error, expected_type) in test_cases {
        assert_eq!(error.error_type(), expected_type);
    }
}

#[test]
fn test_helper_functions() {
    assert!(matches!(missing_field_error("x"), AppError::MissingField(m) if m == "x"));
}

#[test]
fn test_failure_messages() {
    assert_eq!(
        AppError::Validation("not text".to_string()).failure_message("GetOrders"),
        "Error while processing GetOrders: Request validation failed: not text"
    );
    assert_eq!(
        missing_field_error("Missing order identification (OrderNumber or CustRef)")
            .failure_message("CancelOrder"),
        "Missing order identification (OrderNumber or CustRef)"
    );
    assert_eq!(
        AppError::Translation("bad body".to_string()).failure_message("CreateOrders"),
        "Error while processing CreateOrders: Translation failed: bad body"
    );
}

#[test]
fn test_serialization_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Serialization(_)));
    assert!(error.should_log_details());
}

#[test]
fn test_error_response_body() {
    let response = missing_field_error("nope").to_error_response();
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"success": false, "type": "missing_field_error", "error": "nope"})
    );
}

#[tokio::test]
async fn test_into_response() {
    let response = AppError::PayloadTooLarge.into_response();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["error"], "Payload too large");
}

#[test]
fn test_translation_context() {
    let result: Result<(), std::io::Error> =
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
    match result.translation_context("Failed to build") {
        Err(AppError::Translation(msg)) => assert_eq!(msg, "Failed to build: disk"),
        _ => panic!("Expected translation error"),
    }
}
