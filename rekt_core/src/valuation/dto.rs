use rust_decimal::Decimal;

use super::{BALANCE_DECIMAL_PLACES, REFERENCE_PRICE, USD_DECIMAL_PLACES};
use crate::helpers::{dto::ValuationResult, utils::to_fixed};

/// Unrounded figures behind a [`ValuationResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    pub balance_eth: Decimal,
    pub eth_price_now: Decimal,
    pub usd_now: Decimal,
    pub usd_reference: Decimal,
    pub diff: Decimal,
}

impl Valuation {
    /// Derives both USD values and their difference from exact inputs.
    ///
    /// Returns `None` if any product leaves the `Decimal` range.
    pub fn new(balance_eth: Decimal, eth_price_now: Decimal) -> Option<Self> {
        let usd_now = balance_eth.checked_mul(eth_price_now)?;
        let usd_reference = balance_eth.checked_mul(REFERENCE_PRICE)?;
        let diff = usd_now.checked_sub(usd_reference)?;

        Some(Self {
            balance_eth,
            eth_price_now,
            usd_now,
            usd_reference,
            diff,
        })
    }
}

impl From<Valuation> for ValuationResult {
    fn from(valuation: Valuation) -> Self {
        ValuationResult {
            balance_eth: to_fixed(valuation.balance_eth, BALANCE_DECIMAL_PLACES),
            eth_price_now: to_fixed(valuation.eth_price_now, USD_DECIMAL_PLACES),
            usd_now: to_fixed(valuation.usd_now, USD_DECIMAL_PLACES),
            usd_jan20: to_fixed(valuation.usd_reference, USD_DECIMAL_PLACES),
            diff: to_fixed(valuation.diff, USD_DECIMAL_PLACES),
        }
    }
}
