//! Calculation logic for the aguinaldo engine.
//!
//! This module contains the two bonus formulas (tenured and new hire), the
//! shared daily-rate derivation, currency rounding, the whole-day date
//! difference, statutory warnings, and the scenario dispatch that ties
//! them together. Everything here is pure: no I/O, no clock reads apart
//! from timing the audit trace.

mod daily_rate;
mod days_worked;
mod engine;
mod new_hire;
mod rounding;
mod tenured;
mod warnings;

pub use daily_rate::{
    DAYS_PER_MONTH, DAYS_PER_YEAR, LEGAL_REF, STATUTORY_BONUS_DAYS, daily_bonus_rate, daily_salary,
};
pub use days_worked::whole_days_between;
pub use engine::{BonusOutcome, calculate, perform_calculation};
pub use new_hire::{NewHireBonusResult, calculate_new_hire, calculate_new_hire_bonus};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round2};
pub use tenured::{TenuredBonusResult, calculate_tenured, calculate_tenured_bonus};
pub use warnings::{
    BELOW_STATUTORY_MINIMUM, PAYMENT_AFTER_DEADLINE, TENURE_EXCEEDS_ONE_YEAR, new_hire_warnings,
    tenured_warnings,
};
