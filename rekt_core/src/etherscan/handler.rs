use std::{fmt, str::FromStr, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;

use crate::{
    error::ProviderError,
    etherscan::dto::{EthPrice, EtherscanResponse},
    provider::{BalanceProvider, PriceProvider},
};

pub const ETHERSCAN_URL: &str = "https://api.etherscan.io/v2/api";

const ETHEREUM_MAINNET: &str = "1";

/// Etherscan client serving both the balance and the price lookup.
#[derive(Clone)]
pub struct Etherscan {
    client: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for Etherscan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Etherscan")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Etherscan {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!("rekt/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call(&self, params: &[(&str, &str)]) -> Result<serde_json::Value, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("chainid", ETHEREUM_MAINNET)])
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        let body: EtherscanResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.without_url().to_string()))?;

        if body.status != "1" {
            let reason = match body.result {
                serde_json::Value::String(reason) if !reason.is_empty() => reason,
                _ => body.message,
            };
            return Err(ProviderError::Rejected(reason));
        }

        Ok(body.result)
    }
}

#[async_trait]
impl BalanceProvider for Etherscan {
    async fn get_balance(&self, address: &str) -> Result<u128, ProviderError> {
        log::debug!("Fetching ETH balance for {}", address);

        let result = self
            .call(&[
                ("module", "account"),
                ("action", "balance"),
                ("address", address),
                ("tag", "latest"),
            ])
            .await?;

        let wei = result
            .as_str()
            .ok_or_else(|| ProviderError::Malformed(format!("balance is not a string: {}", result)))?;

        wei.parse::<u128>()
            .map_err(|e| ProviderError::Malformed(format!("balance {:?}: {}", wei, e)))
    }
}

#[async_trait]
impl PriceProvider for Etherscan {
    async fn get_spot_price_usd(&self) -> Result<Decimal, ProviderError> {
        log::debug!("Fetching ETH spot price");

        let result = self
            .call(&[("module", "stats"), ("action", "ethprice")])
            .await?;

        let price: EthPrice = serde_json::from_value(result)
            .map_err(|e| ProviderError::Malformed(format!("ethprice: {}", e)))?;

        Decimal::from_str(price.ethusd.trim())
            .map_err(|e| ProviderError::Malformed(format!("ethusd {:?}: {}", price.ethusd, e)))
    }
}
