//! Bonus input models.
//!
//! Raw inputs carry exactly what the user typed, one optional string per
//! field. Validated inputs are produced by [`crate::validation::InputValidator`]
//! and are the only thing the calculator accepts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Field;

/// The two bonus scenarios, selected by how long the employee has worked
/// at the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// More than one year employed; bonus days are supplied by company policy.
    Tenured,
    /// Less than one year employed; the bonus is prorated by days worked.
    NewHire,
}

impl Scenario {
    /// Returns the wire name of the scenario.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Tenured => "tenured",
            Scenario::NewHire => "new_hire",
        }
    }

    /// Returns the form fields of this scenario, in display order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Scenario::Tenured => &[Field::MonthlySalary, Field::BonusDays],
            Scenario::NewHire => &[Field::MonthlySalary, Field::StartDate, Field::EndDate],
        }
    }
}

/// Validated input for the tenured formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenuredInput {
    /// Gross monthly salary. Always positive.
    pub monthly_salary: Decimal,
    /// Days of bonus pay owed. Always positive.
    pub bonus_days: Decimal,
}

/// Validated input for the new-hire formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHireInput {
    /// Gross monthly salary. Always positive.
    pub monthly_salary: Decimal,
    /// The date employment started.
    pub start_date: NaiveDate,
    /// The date the bonus is paid. Never before `start_date`.
    pub end_date: NaiveDate,
}

/// A validated bonus input for either scenario.
///
/// # Example
///
/// ```
/// use aguinaldo_engine::models::{BonusInput, Scenario, TenuredInput};
/// use rust_decimal::Decimal;
///
/// let input = BonusInput::Tenured(TenuredInput {
///     monthly_salary: Decimal::new(9000, 0),
///     bonus_days: Decimal::new(15, 0),
/// });
/// assert_eq!(input.scenario(), Scenario::Tenured);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum BonusInput {
    /// Tenured employee input.
    Tenured(TenuredInput),
    /// New hire input.
    NewHire(NewHireInput),
}

impl BonusInput {
    /// Returns the scenario this input belongs to.
    pub fn scenario(&self) -> Scenario {
        match self {
            BonusInput::Tenured(_) => Scenario::Tenured,
            BonusInput::NewHire(_) => Scenario::NewHire,
        }
    }

    /// Returns the monthly salary shared by both scenarios.
    pub fn monthly_salary(&self) -> Decimal {
        match self {
            BonusInput::Tenured(input) => input.monthly_salary,
            BonusInput::NewHire(input) => input.monthly_salary,
        }
    }
}

/// Unvalidated tenured input as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTenuredInput {
    /// Raw monthly salary text.
    #[serde(default)]
    pub monthly_salary: Option<String>,
    /// Raw bonus days text.
    #[serde(default)]
    pub bonus_days: Option<String>,
}

/// Unvalidated new-hire input as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNewHireInput {
    /// Raw monthly salary text.
    #[serde(default)]
    pub monthly_salary: Option<String>,
    /// Raw start date text, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Raw payment date text, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Unvalidated input for either scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum RawBonusInput {
    /// Raw tenured input.
    Tenured(RawTenuredInput),
    /// Raw new hire input.
    NewHire(RawNewHireInput),
}

impl RawBonusInput {
    /// Returns an empty raw input for the given scenario.
    pub fn empty(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Tenured => RawBonusInput::Tenured(RawTenuredInput::default()),
            Scenario::NewHire => RawBonusInput::NewHire(RawNewHireInput::default()),
        }
    }

    /// Returns the scenario this input belongs to.
    pub fn scenario(&self) -> Scenario {
        match self {
            RawBonusInput::Tenured(_) => Scenario::Tenured,
            RawBonusInput::NewHire(_) => Scenario::NewHire,
        }
    }

    /// Returns the raw text of a field, or `None` if it is empty or not
    /// part of this scenario.
    pub fn value(&self, field: Field) -> Option<&str> {
        match (self, field) {
            (RawBonusInput::Tenured(raw), Field::MonthlySalary) => raw.monthly_salary.as_deref(),
            (RawBonusInput::Tenured(raw), Field::BonusDays) => raw.bonus_days.as_deref(),
            (RawBonusInput::NewHire(raw), Field::MonthlySalary) => raw.monthly_salary.as_deref(),
            (RawBonusInput::NewHire(raw), Field::StartDate) => raw.start_date.as_deref(),
            (RawBonusInput::NewHire(raw), Field::EndDate) => raw.end_date.as_deref(),
            _ => None,
        }
    }

    /// Returns the slot holding a field's raw text, or `None` if the field
    /// is not part of this scenario.
    pub fn slot_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        match (self, field) {
            (RawBonusInput::Tenured(raw), Field::MonthlySalary) => Some(&mut raw.monthly_salary),
            (RawBonusInput::Tenured(raw), Field::BonusDays) => Some(&mut raw.bonus_days),
            (RawBonusInput::NewHire(raw), Field::MonthlySalary) => Some(&mut raw.monthly_salary),
            (RawBonusInput::NewHire(raw), Field::StartDate) => Some(&mut raw.start_date),
            (RawBonusInput::NewHire(raw), Field::EndDate) => Some(&mut raw.end_date),
            _ => None,
        }
    }
}
