//! Order operation translators
//!
//! `CreateOrders`, `CreatePickupOrders`, `GetOrders` and `CancelOrder`.

use crate::extract::Extract;
use crate::models::legacy::OrderFilter;
use crate::models::rest::{
    FieldValue, Order, OrderBatch, OrderType, DEFAULT_COUNTRY, DEFAULT_PRODUCT_TYPE,
};
use crate::models::{HttpMethod, LegacyOperation, QueryParams, RestCall};
use crate::services::common::{
    array_with_single, insert_list, insert_scalar, paged_query_params, read_party, ContactPolicy,
};
use crate::utils::date::{format_date_to_yyyymmdd, today};
use crate::utils::error::{helpers::missing_field_error, AppResult, ErrorContext};
use crate::utils::numbers::parse_int_prefix;
use chrono::Utc;
use tracing::debug;

/// Default product for a sender/recipient country pair
pub fn product_type_for_route(sender_country: &str, recipient_country: &str) -> &'static str {
    match (sender_country, recipient_country) {
        ("CZ", "CZ") => "BUSS",
        ("CZ", "SK") => "CONN",
        ("SK", "CZ") => "IMPO",
        _ => DEFAULT_PRODUCT_TYPE,
    }
}

/// Fields both order kinds read the same way
fn read_order(source: &dyn Extract, order_type: OrderType, product_type: String) -> Order {
    let reference_id = match source.field("OrdRefId") {
        Some(id) => FieldValue::Present(id),
        None => FieldValue::Defaulted(format!("missing-{}", Utc::now().timestamp_millis())),
    };

    let shipment_count = source
        .field("CountPack")
        .and_then(|count| parse_int_prefix(&count))
        .unwrap_or(1);

    let date = source
        .field("SendDate")
        .map(|raw| format_date_to_yyyymmdd(&raw))
        .unwrap_or_else(today);

    Order {
        reference_id,
        product_type,
        order_type,
        shipment_count,
        date,
        sender: read_party(source, "Sender", ContactPolicy::Required),
        recipient: None,
        note: source.field("Note"),
        email: source.field("Email"),
        customer_reference: source.field("CustRef"),
    }
}

fn order_batch_call(operation: LegacyOperation, order: Order) -> AppResult<RestCall> {
    debug!("{} order: {:?}", operation, order);
    let body = serde_json::to_value(OrderBatch { orders: vec![order] })
        .translation_context("Failed to build order batch")?;
    Ok(RestCall::new(operation, HttpMethod::Post, "/order/batch").with_body(body))
}

/// `CreateOrders` -> `POST /order/batch` with a transport order
pub fn create_orders(source: &dyn Extract) -> AppResult<RestCall> {
    let sender_country = source
        .nested_field("Sender", "Country")
        .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());
    let recipient_country = source
        .nested_field("Recipient", "Country")
        .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

    let product_type = source.field("PackProductType").unwrap_or_else(|| {
        product_type_for_route(&sender_country, &recipient_country).to_string()
    });

    let mut order = read_order(source, OrderType::TransportOrder, product_type);
    order.recipient = Some(read_party(source, "Recipient", ContactPolicy::Required));

    order_batch_call(LegacyOperation::CreateOrders, order)
}

/// `CreatePickupOrders` -> `POST /order/batch` with a collection order
pub fn create_pickup_orders(source: &dyn Extract) -> AppResult<RestCall> {
    let product_type = source
        .field("PackProductType")
        .unwrap_or_else(|| DEFAULT_PRODUCT_TYPE.to_string());

    let order = read_order(source, OrderType::CollectionOrder, product_type);
    order_batch_call(LegacyOperation::CreatePickupOrders, order)
}

impl OrderFilter {
    /// Read every `GetOrders` filter field
    pub fn extract(source: &dyn Extract) -> Self {
        Self {
            order_numbers: source.array_at("Filter.OrderNumbers"),
            cust_refs: source.array_at("Filter.CustRefs"),
            date_from: source.field("Filter.DateFrom").map(|d| format_date_to_yyyymmdd(&d)),
            date_to: source.field("Filter.DateTo").map(|d| format_date_to_yyyymmdd(&d)),
            order_states: array_with_single(source, "Filter.OrderStates", "Filter.OrderState"),
        }
    }

    pub fn to_query_params(&self) -> QueryParams {
        let mut params = paged_query_params();
        insert_list(&mut params, "OrderNumbers", &self.order_numbers);
        insert_list(&mut params, "CustomerReferences", &self.cust_refs);
        insert_scalar(&mut params, "DateFrom", self.date_from.clone());
        insert_scalar(&mut params, "DateTo", self.date_to.clone());
        insert_list(&mut params, "OrderStates", &self.order_states);
        params
    }
}

/// `GetOrders` -> `GET /order`
pub fn get_orders(source: &dyn Extract) -> AppResult<RestCall> {
    let filter = OrderFilter::extract(source);
    debug!("GetOrders filter: {:?}", filter);

    Ok(RestCall::new(LegacyOperation::GetOrders, HttpMethod::Get, "/order")
        .with_query_params(filter.to_query_params()))
}

/// `CancelOrder` -> `POST /order/cancel`; identifiers travel in the query
pub fn cancel_order(source: &dyn Extract) -> AppResult<RestCall> {
    let order_number = source.field("OrderNumber");
    let customer_reference = source.field("CustRef");

    if order_number.is_none() && customer_reference.is_none() {
        return Err(missing_field_error(
            "Missing order identification (OrderNumber or CustRef)",
        ));
    }

    let mut params = QueryParams::new();
    insert_scalar(&mut params, "orderNumber", order_number);
    insert_scalar(&mut params, "customerReference", customer_reference);
    insert_scalar(&mut params, "note", source.field("Note"));

    Ok(RestCall::new(LegacyOperation::CancelOrder, HttpMethod::Post, "/order/cancel")
        .with_query_params(params)
        .with_body(serde_json::json!({})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::LegacyXml;

    #[test]
    fn test_route_product_types() {
        assert_eq!(product_type_for_route("CZ", "CZ"), "BUSS");
        assert_eq!(product_type_for_route("CZ", "SK"), "CONN");
        assert_eq!(product_type_for_route("SK", "CZ"), "IMPO");
        assert_eq!(product_type_for_route("SK", "SK"), "BUSS");
        assert_eq!(product_type_for_route("DE", "CZ"), "BUSS");
    }

    #[test]
    fn test_missing_reference_id_is_timestamped() {
        let xml = LegacyXml::new("<CreatePickupOrders></CreatePickupOrders>");
        let body = create_pickup_orders(&xml).unwrap().body.unwrap();
        let reference = body["orders"][0]["referenceId"].as_str().unwrap();
        assert!(reference.starts_with("missing-"));
        assert!(reference["missing-".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_invalid_count_keeps_default() {
        let xml = LegacyXml::new("<CreatePickupOrders><CountPack>many</CountPack></CreatePickupOrders>");
        let body = create_pickup_orders(&xml).unwrap().body.unwrap();
        assert_eq!(body["orders"][0]["shipmentCount"], 1);
    }
}
