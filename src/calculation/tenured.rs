//! Bonus calculation for employees with more than one year at the company.
//!
//! The bonus is the daily salary multiplied by the number of bonus days the
//! company grants. The days come from company policy and are supplied
//! directly, never computed.

use rust_decimal::Decimal;

use crate::models::{AuditStep, TenuredInput};

use super::daily_rate::{DAYS_PER_MONTH, LEGAL_REF, daily_salary};
use super::rounding::round2;

/// The result of a tenured bonus calculation.
#[derive(Debug, Clone)]
pub struct TenuredBonusResult {
    /// The bonus owed, rounded to 2 decimal places.
    pub amount: Decimal,
    /// The unrounded salary for one day.
    pub daily_salary: Decimal,
    /// Audit steps recording the calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes `round2(monthly_salary / 30 * bonus_days)`.
///
/// Inputs are expected to be validated (both positive). This is a pure
/// function: identical inputs always give identical output.
///
/// # Examples
///
/// ```
/// use aguinaldo_engine::calculation::calculate_tenured_bonus;
/// use rust_decimal::Decimal;
///
/// let amount = calculate_tenured_bonus(Decimal::from(9000), Decimal::from(15));
/// assert_eq!(amount.to_string(), "4500.00");
/// ```
pub fn calculate_tenured_bonus(monthly_salary: Decimal, bonus_days: Decimal) -> Decimal {
    round2(daily_salary(monthly_salary) * bonus_days)
}

/// Calculates a tenured bonus with an audit trail.
///
/// Produces two steps: deriving the daily salary, then applying the bonus
/// days and rounding.
///
/// # Arguments
///
/// * `input` - The validated tenured input
/// * `step_number` - The step number of the first audit step
pub fn calculate_tenured(input: &TenuredInput, step_number: u32) -> TenuredBonusResult {
    let daily = daily_salary(input.monthly_salary);
    let amount = calculate_tenured_bonus(input.monthly_salary, input.bonus_days);

    let daily_step = AuditStep {
        step_number,
        rule_id: "daily_salary".to_string(),
        rule_name: "Daily Salary".to_string(),
        clause_ref: LEGAL_REF.to_string(),
        input: serde_json::json!({
            "monthly_salary": input.monthly_salary.to_string(),
            "days_per_month": DAYS_PER_MONTH.to_string()
        }),
        output: serde_json::json!({
            "daily_salary": daily.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} = ${}",
            input.monthly_salary.normalize(),
            DAYS_PER_MONTH,
            daily.round_dp(4).normalize()
        ),
    };

    let bonus_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "tenured_bonus".to_string(),
        rule_name: "Tenured Bonus".to_string(),
        clause_ref: LEGAL_REF.to_string(),
        input: serde_json::json!({
            "daily_salary": daily.normalize().to_string(),
            "bonus_days": input.bonus_days.to_string()
        }),
        output: serde_json::json!({
            "bonus_amount": amount.to_string()
        }),
        reasoning: format!(
            "${} x {} days = ${}",
            daily.round_dp(4).normalize(),
            input.bonus_days.normalize(),
            amount
        ),
    };

    TenuredBonusResult {
        amount,
        daily_salary: daily,
        audit_steps: vec![daily_step, bonus_step],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(salary: &str, days: &str) -> TenuredInput {
        TenuredInput {
            monthly_salary: dec(salary),
            bonus_days: dec(days),
        }
    }

    #[test]
    fn test_statutory_minimum_for_9000() {
        assert_eq!(calculate_tenured_bonus(dec("9000"), dec("15")), dec("4500.00"));
    }

    #[test]
    fn test_result_always_has_two_decimal_places() {
        assert_eq!(
            calculate_tenured_bonus(dec("9000"), dec("15")).to_string(),
            "4500.00"
        );
    }

    #[test]
    fn test_third_decimal_is_rounded() {
        // 3703.68 / 30 = 123.456
        assert_eq!(calculate_tenured_bonus(dec("3703.68"), dec("1")), dec("123.46"));
    }

    #[test]
    fn test_non_round_daily_salary() {
        // 10000 / 30 * 20 = 6666.666...
        assert_eq!(calculate_tenured_bonus(dec("10000"), dec("20")), dec("6666.67"));
    }

    #[test]
    fn test_intermediate_daily_salary_is_not_rounded() {
        // Rounding 333.33 first would give 9999.90
        assert_eq!(calculate_tenured_bonus(dec("10000"), dec("30")), dec("10000.00"));
    }

    #[test]
    fn test_fractional_bonus_days() {
        assert_eq!(calculate_tenured_bonus(dec("9000"), dec("15.5")), dec("4650.00"));
    }

    #[test]
    fn test_audited_calculation_matches_pure_function() {
        let result = calculate_tenured(&input("12345.67", "22"), 1);
        assert_eq!(
            result.amount,
            calculate_tenured_bonus(dec("12345.67"), dec("22"))
        );
    }

    #[test]
    fn test_audit_steps_are_numbered_from_step_number() {
        let result = calculate_tenured(&input("9000", "15"), 4);

        assert_eq!(result.audit_steps.len(), 2);
        assert_eq!(result.audit_steps[0].step_number, 4);
        assert_eq!(result.audit_steps[0].rule_id, "daily_salary");
        assert_eq!(result.audit_steps[1].step_number, 5);
        assert_eq!(result.audit_steps[1].rule_id, "tenured_bonus");
        assert_eq!(result.audit_steps[1].clause_ref, "LFT art. 87");
    }

    #[test]
    fn test_audit_reasoning_explains_calculation() {
        let result = calculate_tenured(&input("9000", "15"), 1);

        assert_eq!(result.daily_salary, dec("300"));
        assert_eq!(result.audit_steps[0].reasoning, "$9000 / 30 = $300");
        assert_eq!(result.audit_steps[1].reasoning, "$300 x 15 days = $4500.00");
        assert_eq!(
            result.audit_steps[1].output["bonus_amount"].as_str().unwrap(),
            "4500.00"
        );
    }

    fn money() -> impl Strategy<Value = Decimal> {
        (1i64..=100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
    }

    fn days() -> impl Strategy<Value = Decimal> {
        (1i64..=36_500i64).prop_map(|tenths| Decimal::new(tenths, 1))
    }

    proptest! {
        #[test]
        fn prop_matches_formula(salary in money(), bonus_days in days()) {
            let expected = round2(salary / Decimal::from(30) * bonus_days);
            prop_assert_eq!(calculate_tenured_bonus(salary, bonus_days), expected);
        }

        #[test]
        fn prop_is_non_negative(salary in money(), bonus_days in days()) {
            prop_assert!(calculate_tenured_bonus(salary, bonus_days) >= Decimal::ZERO);
        }

        #[test]
        fn prop_is_idempotent(salary in money(), bonus_days in days()) {
            prop_assert_eq!(
                calculate_tenured_bonus(salary, bonus_days),
                calculate_tenured_bonus(salary, bonus_days)
            );
        }

        #[test]
        fn prop_has_two_decimal_places(salary in money(), bonus_days in days()) {
            prop_assert_eq!(calculate_tenured_bonus(salary, bonus_days).scale(), 2);
        }
    }
}
