use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::ProviderError;

/// Decimal places between wei and ether.
pub const WEI_DECIMALS: u32 = 18;

/// Source of an account's native-token balance.
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Latest balance of `address` in the chain's smallest unit.
    async fn get_balance(&self, address: &str) -> Result<u128, ProviderError>;

    /// Number of decimal places separating the smallest unit from a whole token.
    fn unit_decimals(&self) -> u32 {
        WEI_DECIMALS
    }
}

/// Source of the native token's current USD price.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    async fn get_spot_price_usd(&self) -> Result<Decimal, ProviderError>;
}
