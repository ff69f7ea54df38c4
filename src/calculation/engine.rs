//! Scenario dispatch and result assembly.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::PolicyConfig;
use crate::format::CurrencyFormatter;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BonusCalculation, BonusInput, Scenario,
};

use super::new_hire::calculate_new_hire;
use super::tenured::calculate_tenured;
use super::warnings::{new_hire_warnings, tenured_warnings};

/// The unformatted outcome of applying the scenario's formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusOutcome {
    /// Which formula was applied.
    pub scenario: Scenario,
    /// The bonus owed, rounded to 2 decimal places.
    pub amount: Decimal,
    /// Audit steps recording the calculation.
    pub audit_steps: Vec<AuditStep>,
    /// Non-blocking statutory warnings.
    pub warnings: Vec<AuditWarning>,
}

/// Applies the formula matching the input's scenario.
///
/// # Examples
///
/// ```
/// use aguinaldo_engine::calculation::calculate;
/// use aguinaldo_engine::config::PolicyConfig;
/// use aguinaldo_engine::models::{BonusInput, TenuredInput};
/// use rust_decimal::Decimal;
///
/// let input = BonusInput::Tenured(TenuredInput {
///     monthly_salary: Decimal::from(9000),
///     bonus_days: Decimal::from(15),
/// });
/// let outcome = calculate(&input, &PolicyConfig::default());
/// assert_eq!(outcome.amount.to_string(), "4500.00");
/// assert!(outcome.warnings.is_empty());
/// ```
pub fn calculate(input: &BonusInput, policy: &PolicyConfig) -> BonusOutcome {
    match input {
        BonusInput::Tenured(tenured) => {
            let result = calculate_tenured(tenured, 1);
            BonusOutcome {
                scenario: Scenario::Tenured,
                amount: result.amount,
                audit_steps: result.audit_steps,
                warnings: tenured_warnings(tenured),
            }
        }
        BonusInput::NewHire(new_hire) => {
            let result = calculate_new_hire(new_hire, 1);
            BonusOutcome {
                scenario: Scenario::NewHire,
                amount: result.amount,
                audit_steps: result.audit_steps,
                warnings: new_hire_warnings(new_hire, result.days_worked, policy),
            }
        }
    }
}

/// Calculates a bonus and assembles the full result with its formatted
/// amount and audit trace.
pub fn perform_calculation<F>(
    input: &BonusInput,
    policy: &PolicyConfig,
    formatter: &F,
) -> BonusCalculation
where
    F: CurrencyFormatter + ?Sized,
{
    let start_time = Instant::now();
    let outcome = calculate(input, policy);
    let formatted_amount = formatter.format_currency(outcome.amount);
    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        scenario = outcome.scenario.as_str(),
        bonus_amount = %outcome.amount,
        warnings = outcome.warnings.len(),
        duration_us,
        "Bonus calculated"
    );

    BonusCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        scenario: outcome.scenario,
        bonus_amount: outcome.amount,
        formatted_amount,
        audit_trace: AuditTrace {
            steps: outcome.audit_steps,
            warnings: outcome.warnings,
            duration_us,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LocaleCurrencyFormatter;
    use crate::models::{NewHireInput, TenuredInput};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tenured(salary: &str, days: &str) -> BonusInput {
        BonusInput::Tenured(TenuredInput {
            monthly_salary: dec(salary),
            bonus_days: dec(days),
        })
    }

    fn new_hire(salary: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> BonusInput {
        BonusInput::NewHire(NewHireInput {
            monthly_salary: dec(salary),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        })
    }

    #[test]
    fn test_dispatches_tenured() {
        let outcome = calculate(&tenured("9000", "15"), &PolicyConfig::default());

        assert_eq!(outcome.scenario, Scenario::Tenured);
        assert_eq!(outcome.amount, dec("4500.00"));
        assert_eq!(outcome.audit_steps.len(), 2);
    }

    #[test]
    fn test_dispatches_new_hire() {
        let outcome = calculate(
            &new_hire("9000", (2024, 1, 1), (2024, 12, 20)),
            &PolicyConfig::default(),
        );

        assert_eq!(outcome.scenario, Scenario::NewHire);
        assert_eq!(outcome.amount, dec("4364.38"));
        assert_eq!(outcome.audit_steps.len(), 3);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_warnings_do_not_change_amount() {
        let outcome = calculate(&tenured("9000", "10"), &PolicyConfig::default());

        assert_eq!(outcome.amount, dec("3000.00"));
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn test_perform_calculation_formats_amount() {
        let formatter = LocaleCurrencyFormatter::default();
        let result = perform_calculation(&tenured("9000", "15"), &PolicyConfig::default(), &formatter);

        assert_eq!(result.scenario, Scenario::Tenured);
        assert_eq!(result.bonus_amount, dec("4500.00"));
        assert_eq!(result.formatted_amount, "$4,500.00");
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(result.audit_trace.steps.len(), 2);
    }

    #[test]
    fn test_each_calculation_gets_a_fresh_id() {
        let formatter = LocaleCurrencyFormatter::default();
        let input = tenured("9000", "15");
        let first = perform_calculation(&input, &PolicyConfig::default(), &formatter);
        let second = perform_calculation(&input, &PolicyConfig::default(), &formatter);

        assert_ne!(first.calculation_id, second.calculation_id);
        assert_eq!(first.bonus_amount, second.bonus_amount);
    }
}
