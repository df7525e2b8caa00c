//! Request translator
//!
//! Entry point of the core: detects the legacy operation in a request and
//! hands the text to the matching operation translator.

use crate::extract::LegacyXml;
use crate::models::{LegacyOperation, RestCall, RestCallDescriptor};
use crate::services::{access_points, detector, orders, shipments};
use crate::utils::error::AppResult;
use crate::utils::logging::{create_descriptor_log_summary, create_input_log_summary};
use crate::utils::query::construct_query_string;
use tracing::{debug, info, warn};

/// Stateless translator; the base URL is only used to compose full URLs
#[derive(Debug, Clone)]
pub struct RequestTranslator {
    base_url: String,
}

impl RequestTranslator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Translate one legacy request into a REST call descriptor
    pub fn translate(&self, text: &str) -> RestCallDescriptor {
        translate_request(text)
    }

    /// Base URL + path + query string
    pub fn full_url(&self, call: &RestCall) -> String {
        let query = call
            .query_params
            .as_ref()
            .map(construct_query_string)
            .unwrap_or_default();
        format!("{}{}{}", self.base_url, call.path, query)
    }
}

/// Detect and dispatch; translation errors become failure descriptors
pub fn translate_request(text: &str) -> RestCallDescriptor {
    if text.trim().is_empty() {
        return RestCallDescriptor::failure("Please provide a legacy SOAP XML request.");
    }

    debug!("Translating request: {}", create_input_log_summary(text));

    let Some(operation) = detector::detect_operation(text) else {
        warn!("No supported operation found in request");
        return RestCallDescriptor::failure(format!(
            "Unsupported or unrecognized operation (supported operations: {}).",
            LegacyOperation::supported_list()
        ));
    };

    let source = LegacyXml::new(text);
    let descriptor = match dispatch(operation, &source) {
        Ok(call) => {
            info!("Translated {} to {} {}", operation, call.method, call.path);
            RestCallDescriptor::from(call)
        }
        Err(e) => {
            if e.should_log_details() {
                warn!("Translation of {} failed: {:?}", operation, e);
            } else {
                info!("Translation of {} rejected: {}", operation, e);
            }
            RestCallDescriptor::failure(e.failure_message(operation.as_str()))
        }
    };

    debug!("Descriptor: {}", create_descriptor_log_summary(&descriptor));
    descriptor
}

fn dispatch(operation: LegacyOperation, source: &LegacyXml<'_>) -> AppResult<RestCall> {
    match operation {
        LegacyOperation::CreatePackages => shipments::create_packages(source),
        LegacyOperation::CreateOrders => orders::create_orders(source),
        LegacyOperation::CreatePickupOrders => orders::create_pickup_orders(source),
        LegacyOperation::GetPackages => shipments::get_packages(source),
        LegacyOperation::CancelPackage => shipments::cancel_package(source),
        LegacyOperation::UpdatePackage => shipments::update_package(source),
        LegacyOperation::GetOrders => orders::get_orders(source),
        LegacyOperation::CancelOrder => orders::cancel_order(source),
        LegacyOperation::GetParcelShops => access_points::get_parcel_shops(source),
    }
}
