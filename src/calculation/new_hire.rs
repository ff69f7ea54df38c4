//! Bonus calculation for employees with less than one year at the company.
//!
//! A full 15-day bonus is accrued evenly over a 365-day year and paid in
//! proportion to the days actually worked between the start date and the
//! payment date.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{AuditStep, NewHireInput};

use super::daily_rate::{DAYS_PER_YEAR, LEGAL_REF, STATUTORY_BONUS_DAYS, daily_bonus_rate};
use super::days_worked::whole_days_between;
use super::rounding::round2;

/// The result of a new-hire bonus calculation.
#[derive(Debug, Clone)]
pub struct NewHireBonusResult {
    /// The bonus owed, rounded to 2 decimal places.
    pub amount: Decimal,
    /// Whole days between the start date and the payment date.
    pub days_worked: i64,
    /// The unrounded bonus accrued per day worked.
    pub daily_bonus_rate: Decimal,
    /// Audit steps recording the calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes `round2((monthly_salary / 30 * 15) / 365 * days_worked)`.
///
/// Inputs are expected to be validated, with `end_date >= start_date`. If a
/// caller passes dates in the wrong order anyway, days worked is clamped to
/// zero so the amount is never negative.
///
/// # Examples
///
/// ```
/// use aguinaldo_engine::calculation::calculate_new_hire_bonus;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let amount = calculate_new_hire_bonus(
///     Decimal::from(9000),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
/// );
/// assert_eq!(amount.to_string(), "4364.38");
/// ```
pub fn calculate_new_hire_bonus(
    monthly_salary: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Decimal {
    let days_worked = whole_days_between(start_date, end_date).max(0);
    round2(daily_bonus_rate(monthly_salary) * Decimal::from(days_worked))
}

/// Calculates a new-hire bonus with an audit trail.
///
/// Produces three steps: counting days worked, deriving the daily bonus
/// rate, then prorating and rounding.
///
/// # Arguments
///
/// * `input` - The validated new-hire input
/// * `step_number` - The step number of the first audit step
pub fn calculate_new_hire(input: &NewHireInput, step_number: u32) -> NewHireBonusResult {
    let raw_days = whole_days_between(input.start_date, input.end_date);
    let days_worked = raw_days.max(0);
    let rate = daily_bonus_rate(input.monthly_salary);
    let amount = calculate_new_hire_bonus(input.monthly_salary, input.start_date, input.end_date);

    let days_step = AuditStep {
        step_number,
        rule_id: "days_worked".to_string(),
        rule_name: "Days Worked".to_string(),
        clause_ref: LEGAL_REF.to_string(),
        input: serde_json::json!({
            "start_date": input.start_date.to_string(),
            "end_date": input.end_date.to_string()
        }),
        output: serde_json::json!({
            "days_worked": days_worked,
            "clamped": raw_days < 0
        }),
        reasoning: format!(
            "{} - {} = {} days",
            input.end_date, input.start_date, days_worked
        ),
    };

    let rate_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "daily_bonus_rate".to_string(),
        rule_name: "Daily Bonus Rate".to_string(),
        clause_ref: LEGAL_REF.to_string(),
        input: serde_json::json!({
            "monthly_salary": input.monthly_salary.to_string(),
            "statutory_bonus_days": STATUTORY_BONUS_DAYS.to_string(),
            "days_per_year": DAYS_PER_YEAR.to_string()
        }),
        output: serde_json::json!({
            "daily_bonus_rate": rate.normalize().to_string()
        }),
        reasoning: format!(
            "(${} / 30 x {}) / {} = ${}",
            input.monthly_salary.normalize(),
            STATUTORY_BONUS_DAYS,
            DAYS_PER_YEAR,
            rate.round_dp(4).normalize()
        ),
    };

    let bonus_step = AuditStep {
        step_number: step_number + 2,
        rule_id: "new_hire_bonus".to_string(),
        rule_name: "Prorated Bonus".to_string(),
        clause_ref: LEGAL_REF.to_string(),
        input: serde_json::json!({
            "daily_bonus_rate": rate.normalize().to_string(),
            "days_worked": days_worked
        }),
        output: serde_json::json!({
            "bonus_amount": amount.to_string()
        }),
        reasoning: format!(
            "${} x {} days = ${}",
            rate.round_dp(4).normalize(),
            days_worked,
            amount
        ),
    };

    NewHireBonusResult {
        amount,
        days_worked,
        daily_bonus_rate: rate,
        audit_steps: vec![days_step, rate_step, bonus_step],
    }
}
