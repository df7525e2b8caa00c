//! Legacy SOAP API data models
//!
//! The operations the translator recognises and the filter records it reads
//! out of their `Filter` elements.

use crate::models::descriptor::HttpMethod;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A legacy SOAP-RPC operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegacyOperation {
    CreatePackages,
    CreateOrders,
    CreatePickupOrders,
    GetPackages,
    CancelPackage,
    UpdatePackage,
    GetOrders,
    CancelOrder,
    GetParcelShops,
}

impl LegacyOperation {
    /// All operations in detection priority order
    pub const ALL: [LegacyOperation; 9] = [
        LegacyOperation::CreatePackages,
        LegacyOperation::CreateOrders,
        LegacyOperation::CreatePickupOrders,
        LegacyOperation::GetPackages,
        LegacyOperation::CancelPackage,
        LegacyOperation::UpdatePackage,
        LegacyOperation::GetOrders,
        LegacyOperation::CancelOrder,
        LegacyOperation::GetParcelShops,
    ];

    /// Operation name, which is also the local name of its root element
    pub fn as_str(&self) -> &'static str {
        match self {
            LegacyOperation::CreatePackages => "CreatePackages",
            LegacyOperation::CreateOrders => "CreateOrders",
            LegacyOperation::CreatePickupOrders => "CreatePickupOrders",
            LegacyOperation::GetPackages => "GetPackages",
            LegacyOperation::CancelPackage => "CancelPackage",
            LegacyOperation::UpdatePackage => "UpdatePackage",
            LegacyOperation::GetOrders => "GetOrders",
            LegacyOperation::CancelOrder => "CancelOrder",
            LegacyOperation::GetParcelShops => "GetParcelShops",
        }
    }

    /// REST method the operation translates to
    pub fn rest_method(&self) -> HttpMethod {
        match self {
            LegacyOperation::GetPackages
            | LegacyOperation::GetOrders
            | LegacyOperation::GetParcelShops => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    /// REST path template; `{shipmentNumber}` is filled from the request
    pub fn rest_path(&self) -> &'static str {
        match self {
            LegacyOperation::CreatePackages => "/shipment/batch",
            LegacyOperation::CreateOrders | LegacyOperation::CreatePickupOrders => "/order/batch",
            LegacyOperation::GetPackages => "/shipment",
            LegacyOperation::CancelPackage => "/shipment/{shipmentNumber}/cancel",
            LegacyOperation::UpdatePackage => "/shipment/{shipmentNumber}/redirect",
            LegacyOperation::GetOrders => "/order",
            LegacyOperation::CancelOrder => "/order/cancel",
            LegacyOperation::GetParcelShops => "/accessPoint",
        }
    }

    /// Comma-separated list of every supported operation name
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|op| op.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for LegacyOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GetPackages` filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageFilter {
    pub pack_numbers: Vec<String>,
    pub cust_refs: Vec<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub package_states: Vec<String>,
    pub invoice: Option<String>,
    pub routing_code: Option<String>,
    pub sender_city: Option<String>,
    pub recipient_city: Option<String>,
    pub external_number: Option<String>,
    pub is_return_package: Option<String>,
    pub inv_numbers: Vec<String>,
    pub sizes: Vec<String>,
    pub variable_symbols_cod: Option<String>,
    /// Legacy-only; only its presence matters
    pub subject_id: Option<String>,
    /// Legacy-only status language selector
    pub status_lang: StatusLang,
}

/// How the legacy `StatusLang` selector showed up in the request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusLang {
    #[default]
    Absent,
    /// Found as a `v1:`-prefixed element with a value
    Value(String),
    /// The name occurs in the text but no value could be read
    Mentioned,
}

/// `GetOrders` filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub order_numbers: Vec<String>,
    pub cust_refs: Vec<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub order_states: Vec<String>,
}

/// `GetParcelShops` filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParcelShopFilter {
    pub access_point_type: Option<String>,
    pub active_card_payment: Option<String>,
    pub active_cash_payment: Option<String>,
    pub city: Option<String>,
    pub code: Option<String>,
    pub country_code: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub radius: Option<String>,
    pub zip_code: Option<String>,
    pub sizes: Vec<String>,
}
