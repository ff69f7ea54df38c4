//! Input validation for the aguinaldo engine.
//!
//! Raw form text is checked here before any calculation is attempted. A
//! submission either produces a fully validated [`crate::models::BonusInput`]
//! or a set of field-scoped errors; the calculator never sees invalid data.

mod fields;
mod validator;

pub use fields::{
    DATE_FORMAT, DateWindow, MAX_INPUT_VALUE, validate_bonus_days, validate_date, validate_monthly_salary,
    validate_positive_number,
};
pub use validator::InputValidator;
