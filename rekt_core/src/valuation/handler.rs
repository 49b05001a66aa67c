use crate::{
    error::{ProviderError, UpstreamCall, ValuationError},
    helpers::{dto::ValuationResult, utils::from_smallest_unit},
    provider::{BalanceProvider, PriceProvider},
};

use super::dto::Valuation;

/// Values `address` at the live ETH price and at the reference price.
///
/// Both lookups run concurrently. If either fails the whole valuation fails;
/// no partial result is ever produced.
pub async fn get_valuation(
    address: &str,
    balance_provider: &dyn BalanceProvider,
    price_provider: &dyn PriceProvider,
) -> Result<ValuationResult, ValuationError> {
    let address = address.trim();

    if address.is_empty() {
        return Err(ValuationError::InvalidInput);
    }

    let (balance, price) = tokio::join!(
        balance_provider.get_balance(address),
        price_provider.get_spot_price_usd(),
    );

    let balance_wei = balance.map_err(ValuationError::upstream(UpstreamCall::Balance))?;
    let eth_price_now = price.map_err(ValuationError::upstream(UpstreamCall::Price))?;

    log::debug!(
        "Wallet {} holds {} wei, ETH spot price ${}",
        address,
        balance_wei,
        eth_price_now
    );

    if eth_price_now.is_sign_negative() {
        return Err(ValuationError::upstream(UpstreamCall::Price)(
            ProviderError::Malformed(format!("negative price {}", eth_price_now)),
        ));
    }

    let balance_eth = from_smallest_unit(balance_wei, balance_provider.unit_decimals())
        .ok_or_else(|| {
            ValuationError::upstream(UpstreamCall::Balance)(ProviderError::Malformed(format!(
                "balance {} is out of range",
                balance_wei
            )))
        })?;

    let valuation = Valuation::new(balance_eth, eth_price_now).ok_or_else(|| {
        ValuationError::upstream(UpstreamCall::Balance)(ProviderError::Malformed(format!(
            "valuation of {} ETH is out of range",
            balance_eth
        )))
    })?;

    Ok(valuation.into())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    struct StubBalance {
        wei: Result<u128, u16>,
        calls: AtomicUsize,
    }

    impl StubBalance {
        fn ok(wei: u128) -> Self {
            Self {
                wei: Ok(wei),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                wei: Err(status),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BalanceProvider for StubBalance {
        async fn get_balance(&self, _address: &str) -> Result<u128, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.wei.map_err(ProviderError::Status)
        }
    }

    struct StubPrice {
        price: Result<Decimal, u16>,
        calls: AtomicUsize,
    }

    impl StubPrice {
        fn ok(price: Decimal) -> Self {
            Self {
                price: Ok(price),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                price: Err(status),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PriceProvider for StubPrice {
        async fn get_spot_price_usd(&self) -> Result<Decimal, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.price.map_err(ProviderError::Status)
        }
    }

    const ADDRESS: &str = "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae";

    #[tokio::test]
    async fn test_gain_case() {
        let balance = StubBalance::ok(2_500_000_000_000_000_000);
        let price = StubPrice::ok(dec!(3500.00));

        let result = get_valuation(ADDRESS, &balance, &price).await.unwrap();

        assert_eq!(
            result,
            ValuationResult {
                balance_eth: "2.50000".to_string(),
                eth_price_now: "3500.00".to_string(),
                usd_now: "8750.00".to_string(),
                usd_jan20: "8397.50".to_string(),
                diff: "352.50".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_empty_wallet() {
        let balance = StubBalance::ok(0);
        let price = StubPrice::ok(dec!(2718.42));

        let result = get_valuation(ADDRESS, &balance, &price).await.unwrap();

        assert_eq!(result.balance_eth, "0.00000");
        assert_eq!(result.eth_price_now, "2718.42");
        assert_eq!(result.usd_now, "0.00");
        assert_eq!(result.usd_jan20, "0.00");
        assert_eq!(result.diff, "0.00");
    }

    #[tokio::test]
    async fn test_loss_case() {
        let balance = StubBalance::ok(1_000_000_000_000_000_000);
        let price = StubPrice::ok(dec!(3000.00));

        let result = get_valuation(ADDRESS, &balance, &price).await.unwrap();

        assert_eq!(result.usd_now, "3000.00");
        assert_eq!(result.usd_jan20, "3359.00");
        assert_eq!(result.diff, "-359.00");
    }

    #[tokio::test]
    async fn test_fixed_precision() {
        // 0.123456789 ETH at an unrounded price
        let balance = StubBalance::ok(123_456_789_000_000_000);
        let price = StubPrice::ok(dec!(3187.4567));

        let result = get_valuation(ADDRESS, &balance, &price).await.unwrap();

        assert_eq!(result.balance_eth, "0.12346");
        assert_eq!(result.eth_price_now, "3187.46");
        // 0.123456789 * 3187.4567 = 393.5131...
        assert_eq!(result.usd_now, "393.51");
        // 0.123456789 * 3359 = 414.691354...
        assert_eq!(result.usd_jan20, "414.69");
        assert_eq!(result.diff, "-21.18");

        for figure in [
            &result.eth_price_now,
            &result.usd_now,
            &result.usd_jan20,
            &result.diff,
        ] {
            assert_eq!(figure.split('.').nth(1).map(str::len), Some(2), "{}", figure);
        }
        assert_eq!(result.balance_eth.split('.').nth(1).map(str::len), Some(5));
    }

    #[tokio::test]
    async fn test_diff_uses_unrounded_products() {
        // 0.000001 ETH
        let balance = StubBalance::ok(1_000_000_000_000);
        let price = StubPrice::ok(dec!(5000.00));

        let result = get_valuation(ADDRESS, &balance, &price).await.unwrap();

        assert_eq!(result.usd_now, "0.01");
        assert_eq!(result.usd_jan20, "0.00");
        assert_eq!(result.diff, "0.00");
    }

    #[tokio::test]
    async fn test_empty_address_skips_upstream() {
        let balance = StubBalance::ok(1);
        let price = StubPrice::ok(dec!(1));

        for address in ["", "   "] {
            let err = get_valuation(address, &balance, &price).await.unwrap_err();
            assert!(matches!(err, ValuationError::InvalidInput));
        }

        assert_eq!(balance.calls.load(Ordering::SeqCst), 0);
        assert_eq!(price.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_balance_failure() {
        let balance = StubBalance::failing(503);
        let price = StubPrice::ok(dec!(3500.00));

        let err = get_valuation(ADDRESS, &balance, &price).await.unwrap_err();

        assert!(matches!(
            err,
            ValuationError::UpstreamUnavailable {
                call: UpstreamCall::Balance,
                source: ProviderError::Status(503),
            }
        ));
    }

    #[tokio::test]
    async fn test_price_failure() {
        let balance = StubBalance::ok(1_000_000_000_000_000_000);
        let price = StubPrice::failing(429);

        let err = get_valuation(ADDRESS, &balance, &price).await.unwrap_err();

        assert!(matches!(
            err,
            ValuationError::UpstreamUnavailable {
                call: UpstreamCall::Price,
                source: ProviderError::Status(429),
            }
        ));
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected() {
        let balance = StubBalance::ok(1_000_000_000_000_000_000);
        let price = StubPrice::ok(dec!(-1.00));

        let err = get_valuation(ADDRESS, &balance, &price).await.unwrap_err();

        assert!(matches!(
            err,
            ValuationError::UpstreamUnavailable {
                call: UpstreamCall::Price,
                source: ProviderError::Malformed(_),
            }
        ));
    }

    #[tokio::test]
    async fn test_unrepresentable_balance() {
        let balance = StubBalance::ok(u128::MAX);
        let price = StubPrice::ok(dec!(3500.00));

        let err = get_valuation(ADDRESS, &balance, &price).await.unwrap_err();

        assert!(matches!(
            err,
            ValuationError::UpstreamUnavailable {
                call: UpstreamCall::Balance,
                ..
            }
        ));
    }
}
