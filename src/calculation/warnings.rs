//! Statutory warnings.
//!
//! Warnings flag results that are computable but probably non-compliant or
//! entered under the wrong scenario. They are attached to the audit trace
//! and never block a result.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{AuditWarning, NewHireInput, TenuredInput};

use super::daily_rate::{DAYS_PER_YEAR, STATUTORY_BONUS_DAYS};

/// Warning code for tenured bonus days below the legal minimum.
pub const BELOW_STATUTORY_MINIMUM: &str = "BELOW_STATUTORY_MINIMUM";

/// Warning code for a payment date after the yearly deadline.
pub const PAYMENT_AFTER_DEADLINE: &str = "PAYMENT_AFTER_DEADLINE";

/// Warning code for a new-hire period longer than a year.
pub const TENURE_EXCEEDS_ONE_YEAR: &str = "TENURE_EXCEEDS_ONE_YEAR";

/// Returns warnings for a tenured input.
pub fn tenured_warnings(input: &TenuredInput) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if input.bonus_days < STATUTORY_BONUS_DAYS {
        warnings.push(AuditWarning {
            code: BELOW_STATUTORY_MINIMUM.to_string(),
            message: format!(
                "{} bonus days is below the statutory minimum of {}",
                input.bonus_days.normalize(),
                STATUTORY_BONUS_DAYS.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    warnings
}

/// Returns warnings for a new-hire input given the days it covers.
pub fn new_hire_warnings(
    input: &NewHireInput,
    days_worked: i64,
    policy: &PolicyConfig,
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if policy.payment_deadline.is_missed_by(input.end_date) {
        warnings.push(AuditWarning {
            code: PAYMENT_AFTER_DEADLINE.to_string(),
            message: format!(
                "Payment date {} is after the {:02}-{:02} deadline",
                input.end_date, policy.payment_deadline.month, policy.payment_deadline.day
            ),
            severity: "medium".to_string(),
        });
    }

    if Decimal::from(days_worked) > DAYS_PER_YEAR {
        warnings.push(AuditWarning {
            code: TENURE_EXCEEDS_ONE_YEAR.to_string(),
            message: format!(
                "{} days worked exceeds one year; the tenured formula may apply",
                days_worked
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}
