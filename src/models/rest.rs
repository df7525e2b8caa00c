//! CPL REST API payload models
//!
//! Request body shapes of the target REST API. Every struct here is built
//! fresh for one translation and serialized straight into the descriptor.

use serde::{Deserialize, Serialize, Serializer};

/// Placeholder for a required name that the legacy request did not carry
pub const MISSING_NAME: &str = "missing - name";
/// Placeholder for a required street
pub const MISSING_STREET: &str = "missing - street";
/// Placeholder for a required city
pub const MISSING_CITY: &str = "missing - city";
/// Placeholder for a required zip code
pub const MISSING_ZIP_CODE: &str = "missing - zip code";
/// Placeholder for contact fields the REST API validates as mandatory
pub const REQUIRED_IN_REST_API: &str = "REQUIRED IN REST API";
/// Country used when a party has none
pub const DEFAULT_COUNTRY: &str = "CZ";
/// Product type used when none is given and no routing rule applies
pub const DEFAULT_PRODUCT_TYPE: &str = "BUSS";

/// Where a required value came from.
///
/// Serializes as the bare string so the JSON shape is identical either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Read from the legacy request
    Present(String),
    /// Substituted default or placeholder
    Defaulted(String),
}

impl FieldValue {
    /// Use `value` when it is there, otherwise `fallback`
    pub fn or_default(value: Option<String>, fallback: &str) -> Self {
        match value {
            Some(v) => FieldValue::Present(v),
            None => FieldValue::Defaulted(fallback.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Present(v) | FieldValue::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, FieldValue::Defaulted(_))
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Sender or recipient address block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderRecipient {
    pub name: FieldValue,
    pub street: FieldValue,
    pub city: FieldValue,
    pub zip_code: FieldValue,
    pub country: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// A number when the source parsed as one, otherwise the raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentSet {
    pub number_of_shipments: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashOnDelivery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_price: Option<serde_json::Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_var_sym: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalNumber {
    pub code: String,
    pub external_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificDelivery {
    pub parcel_shop_code: String,
}

/// One shipment of `POST /shipment/batch`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub product_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depot: Option<String>,
    pub sender: SenderRecipient,
    pub recipient: SenderRecipient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_set: Option<ShipmentSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<NumberOrText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_delivery: Option<SpecificDelivery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_on_delivery: Option<CashOnDelivery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_numbers: Option<Vec<ExternalNumber>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnChannel {
    #[serde(rename = "type")]
    pub channel_type: String,
}

impl Default for ReturnChannel {
    fn default() -> Self {
        Self {
            channel_type: "None".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSettings {
    pub format: String,
    pub dpi: u32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            format: "Pdf".to_string(),
            dpi: 300,
        }
    }
}

/// Body of `POST /shipment/batch`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentBatch {
    pub return_channel: ReturnChannel,
    pub label_settings: LabelSettings,
    pub shipments: Vec<Shipment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrator_id: Option<String>,
}

/// Kind of order placed through `POST /order/batch`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    TransportOrder,
    CollectionOrder,
}

/// One order of `POST /order/batch`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub reference_id: FieldValue,
    pub product_type: String,
    pub order_type: OrderType,
    pub shipment_count: i64,
    pub date: String,
    pub sender: SenderRecipient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<SenderRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
}

/// Body of `POST /order/batch`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBatch {
    pub orders: Vec<Order>,
}

/// Body of `POST /shipment/{shipmentNumber}/cancel`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelShipmentBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipientContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RecipientContact {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.email.is_none()
    }
}

/// Body of `POST /shipment/{shipmentNumber}/redirect`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectBody {
    pub recipient_contact: RecipientContact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
