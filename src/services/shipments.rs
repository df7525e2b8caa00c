//! Shipment operation translators
//!
//! `CreatePackages`, `GetPackages`, `CancelPackage` and `UpdatePackage`.

use crate::extract::Extract;
use crate::models::legacy::{PackageFilter, StatusLang};
use crate::models::rest::{
    CancelShipmentBody, CashOnDelivery, ExternalNumber, LabelSettings, NumberOrText,
    RecipientContact, RedirectBody, ReturnChannel, Service, Shipment, ShipmentBatch, ShipmentSet,
    SpecificDelivery, DEFAULT_PRODUCT_TYPE,
};
use crate::models::{HttpMethod, LegacyOperation, Note, QueryParams, RestCall};
use crate::services::common::{
    array_with_single, insert_list, insert_scalar, paged_query_params, read_party, ContactPolicy,
};
use crate::utils::date::format_date_to_yyyymmdd;
use crate::utils::error::{helpers::missing_field_error, AppResult};
use crate::utils::numbers::{parse_int_prefix, parse_number_prefix};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

/// External number type code for customer numbers
const EXTERNAL_NUMBER_CODE: &str = "CUST";
/// Service code for age verification on delivery
const AGE_VERIFICATION: &str = "AGE_VERIFICATION";

static STATUS_LANG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<v1:StatusLang[^>]*>([^<]*)</v1:StatusLang>").expect("static StatusLang pattern")
});

/// `CreatePackages` -> `POST /shipment/batch`
pub fn create_packages(source: &dyn Extract) -> AppResult<RestCall> {
    let integrator_id = source.field("IntegrId");

    let mut shipment = Shipment {
        product_type: source
            .field("PackProductType")
            .unwrap_or_else(|| DEFAULT_PRODUCT_TYPE.to_string()),
        reference_id: source.field("PackRef"),
        note: source.field("Note"),
        depot: source.field("DepoCode"),
        sender: read_party(source, "Sender", ContactPolicy::Optional),
        recipient: read_party(source, "Recipient", ContactPolicy::Required),
        shipment_set: None,
        weight: None,
        specific_delivery: None,
        cash_on_delivery: None,
        external_numbers: None,
        services: None,
    };

    if let Some(in_set) = source.nested_field("PackageSet", "PackagesInSet") {
        let count = parse_int_prefix(&in_set).filter(|n| *n != 0).unwrap_or(1);
        shipment.shipment_set = Some(ShipmentSet { number_of_shipments: count });
    }

    if let Some(weight) = source.field("Weight") {
        shipment.weight = Some(match parse_number_prefix(&weight) {
            Some(n) => NumberOrText::Number(n),
            None => NumberOrText::Text(weight),
        });
    }

    if let Some(code) = source.nested_field("SpecDelivery", "ParcelShopCode") {
        shipment.specific_delivery = Some(SpecificDelivery { parcel_shop_code: code });
    }

    let cod_currency = source.nested_field("PaymentInfo", "CodCurrency");
    let cod_price = source.nested_field("PaymentInfo", "CodPrice");
    let cod_var_sym = source.nested_field("PaymentInfo", "CodVarSym");
    if cod_currency.is_some() || cod_price.is_some() || cod_var_sym.is_some() {
        shipment.cash_on_delivery = Some(CashOnDelivery {
            cod_currency,
            cod_price: cod_price.as_deref().and_then(parse_number_prefix),
            cod_var_sym,
        });
    }

    if let Some(number) = source.nested_field("PackagesExtNums", "ExtNumber") {
        shipment.external_numbers = Some(vec![ExternalNumber {
            code: EXTERNAL_NUMBER_CODE.to_string(),
            external_number: number,
        }]);
    }

    let age_check = source
        .field("AgeVerification")
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false);
    if age_check {
        shipment.services = Some(vec![Service {
            code: AGE_VERIFICATION.to_string(),
        }]);
    }

    let batch = ShipmentBatch {
        return_channel: ReturnChannel::default(),
        label_settings: LabelSettings::default(),
        shipments: vec![shipment],
        integrator_id,
    };

    Ok(RestCall::new(LegacyOperation::CreatePackages, HttpMethod::Post, "/shipment/batch")
        .with_body(serde_json::to_value(batch)?))
}

impl PackageFilter {
    /// Read every `GetPackages` filter field; each one independently
    pub fn extract(source: &dyn Extract) -> Self {
        let status_lang = match STATUS_LANG
            .captures(source.raw())
            .and_then(|caps| caps.get(1))
            .filter(|m| !m.as_str().is_empty())
            .map(|m| m.as_str().trim().to_string())
        {
            Some(value) => StatusLang::Value(value),
            None if source.raw().contains("StatusLang") => StatusLang::Mentioned,
            None => StatusLang::Absent,
        };

        Self {
            pack_numbers: source.array_at("Filter.PackNumbers"),
            cust_refs: source.array_at("Filter.CustRefs"),
            date_from: source.field("Filter.DateFrom").map(|d| format_date_to_yyyymmdd(&d)),
            date_to: source.field("Filter.DateTo").map(|d| format_date_to_yyyymmdd(&d)),
            package_states: array_with_single(source, "Filter.PackageStates", "Filter.PackageState"),
            invoice: source.field("Filter.Invoice"),
            routing_code: source.field("Filter.RoutingCode"),
            sender_city: source.field("Filter.SenderCity"),
            recipient_city: source.field("Filter.RecipientCity"),
            external_number: source.field("Filter.ExternalNumber"),
            is_return_package: source
                .field("Filter.IsReturnPackage")
                .map(|v| v.eq_ignore_ascii_case("true").to_string()),
            inv_numbers: source.array_at("Filter.InvNumbers"),
            sizes: array_with_single(source, "Filter.Sizes", "Filter.Size"),
            variable_symbols_cod: source.field("VariableSymbolsCOD"),
            subject_id: source.field("SubjectId"),
            status_lang,
        }
    }

    /// REST query parameters, in the order the REST documentation lists them
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = paged_query_params();
        insert_list(&mut params, "ShipmentNumbers", &self.pack_numbers);
        insert_list(&mut params, "CustomerReferences", &self.cust_refs);
        insert_scalar(&mut params, "DateFrom", self.date_from.clone());
        insert_scalar(&mut params, "DateTo", self.date_to.clone());
        insert_list(&mut params, "ShipmentStates", &self.package_states);
        insert_scalar(&mut params, "Invoice", self.invoice.clone());
        insert_scalar(&mut params, "RoutingCode", self.routing_code.clone());
        insert_scalar(&mut params, "SenderCity", self.sender_city.clone());
        insert_scalar(&mut params, "RecipientCity", self.recipient_city.clone());
        insert_scalar(&mut params, "ExternalNumber", self.external_number.clone());
        insert_scalar(&mut params, "IsReturnPackage", self.is_return_package.clone());
        insert_list(&mut params, "InvoiceNumbers", &self.inv_numbers);
        insert_list(&mut params, "Sizes", &self.sizes);
        insert_scalar(&mut params, "VariableSymbolsCOD", self.variable_symbols_cod.clone());
        params
    }

    /// Warnings for legacy-only parameters that get dropped
    pub fn legacy_notes(&self) -> Vec<Note> {
        let mut notes = Vec::new();

        if self.subject_id.is_some() {
            notes.push(Note::warning(
                "SubjectId",
                "Parameter SubjectId has no equivalent in the REST API and will be ignored.",
            ));
        }

        match &self.status_lang {
            StatusLang::Value(_) => notes.push(Note::warning(
                "StatusLang",
                "Parameter StatusLang has no equivalent in the REST API and will be ignored.",
            )),
            StatusLang::Mentioned => notes.push(Note::warning(
                "StatusLang",
                "Parameter StatusLang was detected, but it has no equivalent in the REST API and will be ignored.",
            )),
            StatusLang::Absent => {}
        }

        notes
    }
}

/// `GetPackages` -> `GET /shipment`
pub fn get_packages(source: &dyn Extract) -> AppResult<RestCall> {
    let filter = PackageFilter::extract(source);
    debug!("GetPackages filter: {:?}", filter);

    let notes = filter.legacy_notes();
    if !notes.is_empty() {
        info!("GetPackages dropped {} legacy-only parameter(s)", notes.len());
    }

    Ok(RestCall::new(LegacyOperation::GetPackages, HttpMethod::Get, "/shipment")
        .with_query_params(filter.to_query_params())
        .with_notes(notes))
}

fn required_pack_number(source: &dyn Extract) -> AppResult<String> {
    source
        .field("PackNumber")
        .ok_or_else(|| missing_field_error("Missing required shipment number (PackNumber)"))
}

/// `CancelPackage` -> `POST /shipment/{shipmentNumber}/cancel`
pub fn cancel_package(source: &dyn Extract) -> AppResult<RestCall> {
    let pack_number = required_pack_number(source)?;
    let body = CancelShipmentBody {
        note: source.field("Note"),
    };

    Ok(RestCall::new(
        LegacyOperation::CancelPackage,
        HttpMethod::Post,
        format!("/shipment/{}/cancel", pack_number),
    )
    .with_body(serde_json::to_value(body)?))
}

/// `UpdatePackage` -> `POST /shipment/{shipmentNumber}/redirect`
pub fn update_package(source: &dyn Extract) -> AppResult<RestCall> {
    let pack_number = required_pack_number(source)?;

    let recipient_contact = RecipientContact {
        phone: source.nested_field("Recipient", "Phone"),
        email: source.nested_field("Recipient", "Email"),
    };
    if recipient_contact.is_empty() {
        return Err(missing_field_error(
            "Missing contact details for the update (phone or email)",
        ));
    }

    let body = RedirectBody {
        recipient_contact,
        note: source.field("Note"),
    };

    Ok(RestCall::new(
        LegacyOperation::UpdatePackage,
        HttpMethod::Post,
        format!("/shipment/{}/redirect", pack_number),
    )
    .with_body(serde_json::to_value(body)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::LegacyXml;
    use crate::models::QueryValue;

    #[test]
    fn test_status_lang_detection() {
        let with_value = LegacyXml::new("<v1:GetPackages><v1:StatusLang>CZ</v1:StatusLang></v1:GetPackages>");
        assert_eq!(PackageFilter::extract(&with_value).status_lang, StatusLang::Value("CZ".to_string()));

        let mentioned = LegacyXml::new("<GetPackages><StatusLang/></GetPackages>");
        assert_eq!(PackageFilter::extract(&mentioned).status_lang, StatusLang::Mentioned);

        let absent = LegacyXml::new("<GetPackages></GetPackages>");
        assert_eq!(PackageFilter::extract(&absent).status_lang, StatusLang::Absent);
    }

    #[test]
    fn test_status_lang_whitespace_counts_as_value() {
        let blank = LegacyXml::new("<v1:GetPackages><v1:StatusLang> </v1:StatusLang></v1:GetPackages>");
        let filter = PackageFilter::extract(&blank);
        assert_eq!(filter.status_lang, StatusLang::Value(String::new()));

        let notes = filter.legacy_notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(
            notes[0].message,
            "Parameter StatusLang has no equivalent in the REST API and will be ignored."
        );

        let empty = LegacyXml::new("<v1:GetPackages><v1:StatusLang></v1:StatusLang></v1:GetPackages>");
        assert_eq!(PackageFilter::extract(&empty).status_lang, StatusLang::Mentioned);
    }

    #[test]
    fn test_is_return_package_is_literal() {
        let xml = LegacyXml::new("<Filter><IsReturnPackage>TRUE</IsReturnPackage></Filter>");
        let params = PackageFilter::extract(&xml).to_query_params();
        assert_eq!(params.get("IsReturnPackage"), Some(&QueryValue::Single("true".to_string())));

        let xml = LegacyXml::new("<Filter><IsReturnPackage>no</IsReturnPackage></Filter>");
        let params = PackageFilter::extract(&xml).to_query_params();
        assert_eq!(params.get("IsReturnPackage"), Some(&QueryValue::Single("false".to_string())));
    }

    #[test]
    fn test_weight_falls_back_to_text() {
        let xml = LegacyXml::new("<CreatePackages><Weight>heavy</Weight></CreatePackages>");
        let call = create_packages(&xml).unwrap();
        let body = call.body.unwrap();
        assert_eq!(body["shipments"][0]["weight"], "heavy");
    }

    #[test]
    fn test_package_set_defaults_to_one() {
        let xml = LegacyXml::new("<PackageSet><PackagesInSet>0</PackagesInSet></PackageSet>");
        let body = create_packages(&xml).unwrap().body.unwrap();
        assert_eq!(body["shipments"][0]["shipmentSet"]["numberOfShipments"], 1);

        let xml = LegacyXml::new("<PackageSet><PackagesInSet>3</PackagesInSet></PackageSet>");
        let body = create_packages(&xml).unwrap().body.unwrap();
        assert_eq!(body["shipments"][0]["shipmentSet"]["numberOfShipments"], 3);
    }
}
