//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every bonus amount is rounded to.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to exactly 2 decimal places, half away from zero.
///
/// Only final amounts are rounded; formula intermediates keep full precision.
///
/// # Examples
///
/// ```
/// use aguinaldo_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("123.456").unwrap()).to_string(), "123.46");
/// assert_eq!(round2(Decimal::from_str("123.455").unwrap()).to_string(), "123.46");
/// assert_eq!(round2(Decimal::from(4500)).to_string(), "4500.00");
/// ```
pub fn round2(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    // round_dp never adds scale, so whole amounts would print as "4500".
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_third_decimal_rounds_up() {
        assert_eq!(round2(dec("123.456")), dec("123.46"));
    }

    #[test]
    fn test_third_decimal_rounds_down() {
        assert_eq!(round2(dec("123.454")), dec("123.45"));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round2(dec("0.125")), dec("0.13"));
        assert_eq!(round2(dec("-0.125")), dec("-0.13"));
    }

    #[test]
    fn test_whole_amount_gets_two_decimal_places() {
        let rounded = round2(dec("4500"));
        assert_eq!(rounded.scale(), 2);
        assert_eq!(rounded.to_string(), "4500.00");
    }

    #[test]
    fn test_long_fraction_is_truncated_to_two_places() {
        let rounded = round2(dec("4364.3835616438356164383561644"));
        assert_eq!(rounded.to_string(), "4364.38");
    }

    #[test]
    fn test_zero_rounds_to_zero() {
        assert_eq!(round2(Decimal::ZERO).to_string(), "0.00");
    }
}
