use serde::Deserialize;

/// Envelope shared by every Etherscan endpoint.
///
/// On failure `status` is `"0"` and `result` carries the reason as a string,
/// whatever type it has on success.
#[derive(Debug, Deserialize)]
pub struct EtherscanResponse {
    pub status: String,
    pub message: String,
    pub result: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct EthPrice {
    pub ethbtc: Option<String>,
    pub ethbtc_timestamp: Option<String>,
    pub ethusd: String,
    pub ethusd_timestamp: Option<String>,
}
