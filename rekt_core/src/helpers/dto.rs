use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, Serialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ValuationQuery {
    /// Ethereum wallet address, e.g. `0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae`
    pub address: Option<String>,
}

/// Wallet value now versus on the reference date.
///
/// Every figure is a fixed-precision decimal string so the client renders it
/// as-is instead of re-rounding a float.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    #[schema(example = "2.50000")]
    pub balance_eth: String,
    #[schema(example = "3500.00")]
    pub eth_price_now: String,
    #[schema(example = "8750.00")]
    pub usd_now: String,
    #[schema(example = "8397.50")]
    pub usd_jan20: String,
    #[schema(example = "352.50")]
    pub diff: String,
}
