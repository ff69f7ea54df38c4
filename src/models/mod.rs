//! Core data models for the aguinaldo engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod field_error;
mod input;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, BonusCalculation};
pub use field_error::{Field, FieldErrors, ValidationErrorKind};
pub use input::{
    BonusInput, NewHireInput, RawBonusInput, RawNewHireInput, RawTenuredInput, Scenario,
    TenuredInput,
};
