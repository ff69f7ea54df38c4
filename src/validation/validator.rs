//! Whole-input validation for both bonus scenarios.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{
    BonusInput, Field, FieldErrors, NewHireInput, RawBonusInput, RawNewHireInput,
    RawTenuredInput, TenuredInput, ValidationErrorKind,
};

use super::fields::{DateWindow, validate_bonus_days, validate_date, validate_monthly_salary};

/// Validates raw form input into the typed inputs the calculator accepts.
///
/// Every field is checked; each invalid field gets exactly one error and
/// valid fields never pick up errors from their neighbours. The only
/// cross-field rule, payment date before start date, is reported on
/// `end_date` and only once both dates are individually valid.
///
/// # Example
///
/// ```
/// use aguinaldo_engine::models::{Field, RawTenuredInput, ValidationErrorKind};
/// use aguinaldo_engine::validation::{DateWindow, InputValidator};
/// use chrono::NaiveDate;
///
/// let validator = InputValidator::new(
///     DateWindow::default(),
///     NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
/// );
/// let raw = RawTenuredInput {
///     monthly_salary: Some("9000".to_string()),
///     bonus_days: Some("0".to_string()),
/// };
///
/// let errors = validator.validate_tenured(&raw).unwrap_err();
/// assert_eq!(errors.get(Field::BonusDays), Some(ValidationErrorKind::NotPositive));
/// assert_eq!(errors.get(Field::MonthlySalary), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InputValidator {
    window: DateWindow,
    today: NaiveDate,
}

impl InputValidator {
    /// Creates a validator accepting dates inside `window` up to `today`.
    pub fn new(window: DateWindow, today: NaiveDate) -> Self {
        Self { window, today }
    }

    /// Returns the date window this validator enforces.
    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Returns the date this validator treats as today.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Validates a tenured input.
    pub fn validate_tenured(&self, raw: &RawTenuredInput) -> Result<TenuredInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let monthly_salary = record(
            &mut errors,
            Field::MonthlySalary,
            validate_monthly_salary(raw.monthly_salary.as_deref()),
        );
        let bonus_days = record(
            &mut errors,
            Field::BonusDays,
            validate_bonus_days(raw.bonus_days.as_deref()),
        );

        match (monthly_salary, bonus_days) {
            (Some(monthly_salary), Some(bonus_days)) => Ok(TenuredInput {
                monthly_salary,
                bonus_days,
            }),
            _ => {
                debug!(errors = %errors, "Tenured input rejected");
                Err(errors)
            }
        }
    }

    /// Validates a new-hire input.
    pub fn validate_new_hire(&self, raw: &RawNewHireInput) -> Result<NewHireInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let monthly_salary = record(
            &mut errors,
            Field::MonthlySalary,
            validate_monthly_salary(raw.monthly_salary.as_deref()),
        );
        let start_date = record(
            &mut errors,
            Field::StartDate,
            validate_date(raw.start_date.as_deref(), &self.window, self.today),
        );
        let end_date = record(
            &mut errors,
            Field::EndDate,
            validate_date(raw.end_date.as_deref(), &self.window, self.today),
        );

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                errors.insert(Field::EndDate, ValidationErrorKind::InvalidRange);
            }
        }

        match (monthly_salary, start_date, end_date) {
            (Some(monthly_salary), Some(start_date), Some(end_date)) if errors.is_empty() => {
                Ok(NewHireInput {
                    monthly_salary,
                    start_date,
                    end_date,
                })
            }
            _ => {
                debug!(errors = %errors, "New hire input rejected");
                Err(errors)
            }
        }
    }

    /// Validates an input for either scenario.
    pub fn validate(&self, raw: &RawBonusInput) -> Result<BonusInput, FieldErrors> {
        match raw {
            RawBonusInput::Tenured(raw) => self.validate_tenured(raw).map(BonusInput::Tenured),
            RawBonusInput::NewHire(raw) => self.validate_new_hire(raw).map(BonusInput::NewHire),
        }
    }

    /// Validates a single field of a raw input in isolation.
    ///
    /// Returns `None` when the field is valid or does not belong to the
    /// input's scenario. The date-order rule is applied to `end_date` when
    /// `start_date` is itself valid.
    pub fn validate_field(&self, raw: &RawBonusInput, field: Field) -> Option<ValidationErrorKind> {
        match (raw, field) {
            (RawBonusInput::Tenured(raw), Field::MonthlySalary) => {
                validate_monthly_salary(raw.monthly_salary.as_deref()).err()
            }
            (RawBonusInput::Tenured(raw), Field::BonusDays) => {
                validate_bonus_days(raw.bonus_days.as_deref()).err()
            }
            (RawBonusInput::NewHire(raw), Field::MonthlySalary) => {
                validate_monthly_salary(raw.monthly_salary.as_deref()).err()
            }
            (RawBonusInput::NewHire(raw), Field::StartDate) => {
                validate_date(raw.start_date.as_deref(), &self.window, self.today).err()
            }
            (RawBonusInput::NewHire(raw), Field::EndDate) => self.validate_end_date(raw).err(),
            _ => None,
        }
    }

    fn validate_end_date(&self, raw: &RawNewHireInput) -> Result<NaiveDate, ValidationErrorKind> {
        let end = validate_date(raw.end_date.as_deref(), &self.window, self.today)?;
        match validate_date(raw.start_date.as_deref(), &self.window, self.today) {
            Ok(start) if end < start => Err(ValidationErrorKind::InvalidRange),
            _ => Ok(end),
        }
    }
}

/// Stores a field's error, if any, and returns the parsed value otherwise.
fn record<T>(
    errors: &mut FieldErrors,
    field: Field,
    result: Result<T, ValidationErrorKind>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(kind) => {
            errors.insert(field, kind);
            None
        }
    }
}
