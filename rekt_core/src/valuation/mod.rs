pub mod dto;
pub mod handler;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// ETH/USD close on the reference date, the baseline every wallet is compared against.
pub const REFERENCE_PRICE: Decimal = dec!(3359.00);

pub const REFERENCE_DATE: &str = "2025-01-20";

pub const BALANCE_DECIMAL_PLACES: u32 = 5;

pub const USD_DECIMAL_PLACES: u32 = 2;
