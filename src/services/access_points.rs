//! `GetParcelShops` -> `GET /accessPoint`

use crate::extract::Extract;
use crate::models::legacy::ParcelShopFilter;
use crate::models::{HttpMethod, LegacyOperation, QueryParams, RestCall};
use crate::services::common::{
    array_with_single, insert_list, insert_scalar, normalize_flag, paged_query_params,
};
use crate::utils::error::AppResult;
use tracing::debug;

impl ParcelShopFilter {
    pub fn extract(source: &dyn Extract) -> Self {
        Self {
            access_point_type: source.field("Filter.AccessPointType"),
            active_card_payment: source.field("Filter.ActiveCardPayment").map(normalize_flag),
            active_cash_payment: source.field("Filter.ActiveCashPayment").map(normalize_flag),
            city: source.field("Filter.City"),
            code: source.field("Filter.Code"),
            // Some clients send the country outside the filter block
            country_code: source
                .field("Filter.CountryCode")
                .or_else(|| source.field("v1:CountryCode")),
            latitude: source.field("Filter.Latitude"),
            longitude: source.field("Filter.Longitude"),
            radius: source.field("Filter.Radius"),
            zip_code: source.field("Filter.ZipCode"),
            sizes: array_with_single(source, "Filter.Sizes", "Filter.Size"),
        }
    }

    pub fn to_query_params(&self) -> QueryParams {
        let mut params = paged_query_params();
        insert_scalar(&mut params, "AccessPointType", self.access_point_type.clone());
        insert_scalar(&mut params, "ActiveCardPayment", self.active_card_payment.clone());
        insert_scalar(&mut params, "ActiveCashPayment", self.active_cash_payment.clone());
        insert_scalar(&mut params, "City", self.city.clone());
        insert_scalar(&mut params, "AccessPointCode", self.code.clone());
        insert_scalar(&mut params, "CountryCode", self.country_code.clone());
        insert_scalar(&mut params, "Latitude", self.latitude.clone());
        insert_scalar(&mut params, "Longitude", self.longitude.clone());
        insert_scalar(&mut params, "Radius", self.radius.clone());
        insert_scalar(&mut params, "ZipCode", self.zip_code.clone());
        insert_list(&mut params, "Sizes", &self.sizes);
        params
    }
}

pub fn get_parcel_shops(source: &dyn Extract) -> AppResult<RestCall> {
    let filter = ParcelShopFilter::extract(source);
    debug!("GetParcelShops filter: {:?}", filter);

    Ok(
        RestCall::new(LegacyOperation::GetParcelShops, HttpMethod::Get, "/accessPoint")
            .with_query_params(filter.to_query_params()),
    )
}
