//! Daily rate derivation shared by both bonus formulas.
//!
//! Article 87 of the Ley Federal del Trabajo sets the bonus at a minimum of
//! 15 days of salary, with a month counted as 30 days and a year as 365.

use rust_decimal::Decimal;

/// Legal provision every bonus audit step refers to.
pub const LEGAL_REF: &str = "LFT art. 87";

/// Days in a salary month.
pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Days in a bonus accrual year.
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Minimum bonus days for a full year of work.
pub const STATUTORY_BONUS_DAYS: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Returns the salary for a single day: `monthly_salary / 30`.
///
/// # Examples
///
/// ```
/// use aguinaldo_engine::calculation::daily_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_salary(Decimal::from(9000)), Decimal::from(300));
/// ```
pub fn daily_salary(monthly_salary: Decimal) -> Decimal {
    monthly_salary / DAYS_PER_MONTH
}

/// Returns the bonus accrued per day worked: a full statutory bonus spread
/// evenly over the year, `(monthly_salary / 30 * 15) / 365`.
pub fn daily_bonus_rate(monthly_salary: Decimal) -> Decimal {
    daily_salary(monthly_salary) * STATUTORY_BONUS_DAYS / DAYS_PER_YEAR
}
