use rust_decimal::{Decimal, RoundingStrategy};

/// Converts an amount in the smallest unit into whole tokens.
///
/// Returns `None` when the amount does not fit in a `Decimal` at the given scale.
pub fn from_smallest_unit(amount: u128, decimals: u32) -> Option<Decimal> {
    let amount = i128::try_from(amount).ok()?;
    Decimal::try_from_i128_with_scale(amount, decimals).ok()
}

/// Formats `value` with exactly `dp` fractional digits, rounding half away from zero.
///
/// A value that rounds to zero is printed without a sign.
pub fn to_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(dp);
    rounded.to_string()
}
