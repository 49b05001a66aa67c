use axum::Json;
use rekt_core::{
    helpers::utils::to_fixed,
    valuation::{REFERENCE_DATE, REFERENCE_PRICE, USD_DECIMAL_PLACES},
};

use super::dto::Info;

#[utoipa::path(
    get,
    path = "/",
    description = "Service name, version and the reference price wallets are compared against",
    responses(
        (status = 200, description = "Success", body = Info),
    )
)]
pub async fn info() -> Json<Info> {
    Json(Info {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        reference_price: to_fixed(REFERENCE_PRICE, USD_DECIMAL_PLACES),
        reference_date: REFERENCE_DATE.to_string(),
    })
}
