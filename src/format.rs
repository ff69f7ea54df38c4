//! Currency formatting for display.
//!
//! The calculator returns bare [`Decimal`] amounts. Turning them into a
//! locale-specific string is the job of a [`CurrencyFormatter`] injected
//! into whatever displays the result.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::DisplayConfig;

/// Renders a monetary amount as a display string.
pub trait CurrencyFormatter {
    /// Formats `amount` for display.
    fn format_currency(&self, amount: Decimal) -> String;
}

/// A symbol-prefixed formatter with configurable separators.
///
/// The default matches `es-MX` pesos: `$4,500.00`.
///
/// # Example
///
/// ```
/// use aguinaldo_engine::format::{CurrencyFormatter, LocaleCurrencyFormatter};
/// use rust_decimal::Decimal;
///
/// let formatter = LocaleCurrencyFormatter::default();
/// assert_eq!(formatter.format_currency(Decimal::new(436438, 2)), "$4,364.38");
/// assert_eq!(formatter.format_currency(Decimal::new(1234567891, 2)), "$12,345,678.91");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCurrencyFormatter {
    symbol: String,
    thousands_separator: String,
    decimal_separator: String,
    decimal_places: u32,
}

impl LocaleCurrencyFormatter {
    /// Creates a formatter from explicit settings.
    pub fn new(
        symbol: impl Into<String>,
        thousands_separator: impl Into<String>,
        decimal_separator: impl Into<String>,
        decimal_places: u32,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            thousands_separator: thousands_separator.into(),
            decimal_separator: decimal_separator.into(),
            decimal_places,
        }
    }

    /// Creates a formatter from the display configuration.
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(
            display.currency_symbol.clone(),
            display.thousands_separator.clone(),
            display.decimal_separator.clone(),
            display.decimal_places,
        )
    }

    fn group_thousands(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

impl Default for LocaleCurrencyFormatter {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format_currency(&self, amount: Decimal) -> String {
        let mut rounded = amount
            .abs()
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.decimal_places);

        let text = rounded.to_string();
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text.as_str(), None),
        };

        let sign = if amount.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let mut formatted = format!("{}{}{}", sign, self.symbol, self.group_thousands(integer));
        if let Some(fraction) = fraction {
            formatted.push_str(&self.decimal_separator);
            formatted.push_str(fraction);
        }
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_formats_tenured_reference_amount() {
        let formatter = LocaleCurrencyFormatter::default();
        assert_eq!(formatter.format_currency(dec("4500.00")), "$4,500.00");
    }

    #[test]
    fn test_small_amounts_have_no_separator() {
        let formatter = LocaleCurrencyFormatter::default();
        assert_eq!(formatter.format_currency(dec("0")), "$0.00");
        assert_eq!(formatter.format_currency(dec("12.3")), "$12.30");
        assert_eq!(formatter.format_currency(dec("999.99")), "$999.99");
    }

    #[test]
    fn test_groups_every_three_digits() {
        let formatter = LocaleCurrencyFormatter::default();
        assert_eq!(formatter.format_currency(dec("1000")), "$1,000.00");
        assert_eq!(formatter.format_currency(dec("100000")), "$100,000.00");
        assert_eq!(formatter.format_currency(dec("1234567.8")), "$1,234,567.80");
    }

    #[test]
    fn test_rounds_to_configured_places() {
        let formatter = LocaleCurrencyFormatter::default();
        assert_eq!(formatter.format_currency(dec("123.456")), "$123.46");
    }

    #[test]
    fn test_negative_amount_has_leading_sign() {
        let formatter = LocaleCurrencyFormatter::default();
        assert_eq!(formatter.format_currency(dec("-1234.5")), "-$1,234.50");
        assert_eq!(formatter.format_currency(dec("-0.001")), "$0.00");
    }

    #[test]
    fn test_custom_separators() {
        let formatter = LocaleCurrencyFormatter::new("€", ".", ",", 2);
        assert_eq!(formatter.format_currency(dec("4364.38")), "€4.364,38");
    }

    #[test]
    fn test_zero_decimal_places() {
        let formatter = LocaleCurrencyFormatter::new("$", ",", ".", 0);
        assert_eq!(formatter.format_currency(dec("4364.5")), "$4,365");
    }

    #[test]
    fn test_formatter_is_object_safe() {
        let formatter: Box<dyn CurrencyFormatter> = Box::new(LocaleCurrencyFormatter::default());
        assert_eq!(formatter.format_currency(dec("1")), "$1.00");
    }
}
