//! Single-field validation rules.
//!
//! Each rule takes the raw text of one field and either returns the parsed
//! value or the single reason it was rejected.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::ValidationErrorKind;

/// The only accepted date format for raw date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted salary or day count. Keeps every formula product well
/// inside the `Decimal` range.
pub const MAX_INPUT_VALUE: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// The window of dates the date inputs accept: nothing before 1900-01-01
/// and nothing after "today".
///
/// The earliest date is fixed because the out-of-range message quotes it.
/// "Today" is supplied by the caller so validation never reads the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    earliest: NaiveDate,
}

impl DateWindow {
    /// Returns the earliest accepted date.
    pub fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    /// Returns true when `date` is within `[earliest, today]`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.earliest && date <= today
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self {
            earliest: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default(),
        }
    }
}

/// Returns the trimmed text, or `Missing` when absent or blank.
fn required(raw: Option<&str>) -> Result<&str, ValidationErrorKind> {
    match raw.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ValidationErrorKind::Missing),
    }
}

/// The shape of a plain or scientific decimal literal.
///
/// Only ASCII digits, one optional point, an optional leading sign and an
/// optional `e`/`E` exponent are accepted; digit separators are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumericLiteral {
    negative: bool,
    /// Number of integer digits the value has, e.g. 3 for `123`, 0 for
    /// `0.5`, -1 for `0.05`. `i64::MIN` for zero.
    order: i64,
}

impl NumericLiteral {
    fn scan(text: &str) -> Option<Self> {
        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(at) => (&text[..at], Some(&text[at + 1..])),
            None => (text, None),
        };

        let (negative, unsigned) = split_sign(mantissa);
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if !all_digits(integer) || !all_digits(fraction) {
            return None;
        }

        let exponent = match exponent {
            Some(exponent) => {
                let (exp_negative, digits) = split_sign(exponent);
                if digits.is_empty() || !all_digits(digits) {
                    return None;
                }
                let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX / 4).min(i64::MAX / 4);
                if exp_negative { -magnitude } else { magnitude }
            }
            None => 0,
        };

        let significant = integer.trim_start_matches('0');
        let order = if !significant.is_empty() {
            significant.len() as i64 + exponent
        } else {
            let leading_zeros = fraction.len() - fraction.trim_start_matches('0').len();
            if leading_zeros == fraction.len() {
                i64::MIN
            } else {
                exponent - leading_zeros as i64
            }
        };

        Some(Self { negative, order })
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a required number that must be strictly positive.
///
/// Accepts plain decimals ("9000", "9000.50") and scientific notation ("9e3").
///
/// # Example
///
/// ```
/// use aguinaldo_engine::models::ValidationErrorKind;
/// use aguinaldo_engine::validation::validate_positive_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(validate_positive_number(Some("9000")), Ok(Decimal::new(9000, 0)));
/// assert_eq!(validate_positive_number(Some("0")), Err(ValidationErrorKind::NotPositive));
/// assert_eq!(validate_positive_number(None), Err(ValidationErrorKind::Missing));
/// ```
pub fn validate_positive_number(raw: Option<&str>) -> Result<Decimal, ValidationErrorKind> {
    let text = required(raw)?;
    let literal = NumericLiteral::scan(text).ok_or(ValidationErrorKind::NotANumber)?;

    let value = match Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
        Ok(value) => value,
        // Well-formed but not representable: too large, or too small to
        // be told apart from zero.
        Err(_) if literal.negative => return Err(ValidationErrorKind::NotPositive),
        Err(_) if literal.order > 0 => return Err(ValidationErrorKind::OutOfRange),
        Err(_) => return Err(ValidationErrorKind::NotPositive),
    };

    if value <= Decimal::ZERO {
        return Err(ValidationErrorKind::NotPositive);
    }
    if value > MAX_INPUT_VALUE {
        return Err(ValidationErrorKind::OutOfRange);
    }

    Ok(value)
}

/// Validates a gross monthly salary.
pub fn validate_monthly_salary(raw: Option<&str>) -> Result<Decimal, ValidationErrorKind> {
    validate_positive_number(raw)
}

/// Validates a number of bonus days.
pub fn validate_bonus_days(raw: Option<&str>) -> Result<Decimal, ValidationErrorKind> {
    validate_positive_number(raw)
}

/// Parses a required `YYYY-MM-DD` date that must fall inside `window`.
pub fn validate_date(
    raw: Option<&str>,
    window: &DateWindow,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationErrorKind> {
    let text = required(raw)?;

    let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| ValidationErrorKind::InvalidDate)?;

    if !window.contains(date, today) {
        return Err(ValidationErrorKind::OutOfRange);
    }

    Ok(date)
}
