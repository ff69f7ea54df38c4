//! Field-scoped validation errors.
//!
//! Every invalid field carries exactly one [`ValidationErrorKind`]; the
//! user-facing message is derived from the kind and the field, in the
//! single display locale (Spanish).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Gross monthly salary.
    MonthlySalary,
    /// Days of bonus pay owed (tenured only).
    BonusDays,
    /// Employment start date (new hire only).
    StartDate,
    /// Bonus payment date (new hire only).
    EndDate,
}

impl Field {
    /// Returns the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::MonthlySalary => "monthly_salary",
            Field::BonusDays => "bonus_days",
            Field::StartDate => "start_date",
            Field::EndDate => "end_date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reason a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// A required field was absent or blank.
    Missing,
    /// A numeric field did not parse as a number.
    NotANumber,
    /// A numeric field was zero or negative.
    NotPositive,
    /// A date field did not parse as `YYYY-MM-DD`.
    InvalidDate,
    /// A date fell outside the selectable window, or a number exceeded
    /// the accepted maximum.
    OutOfRange,
    /// The payment date precedes the start date.
    InvalidRange,
}

impl ValidationErrorKind {
    /// Returns the user-facing message for this error on the given field.
    pub fn message_for(&self, field: Field) -> &'static str {
        match (self, field) {
            (ValidationErrorKind::Missing, Field::EndDate) => {
                "Debes seleccionar la fecha de paga del aguinaldo."
            }
            (ValidationErrorKind::Missing, _) => "Campo requerido",
            (ValidationErrorKind::NotANumber, _) => "Debe ser un número.",
            (ValidationErrorKind::NotPositive, _) => "Debe ser mayor a 0.",
            (ValidationErrorKind::InvalidDate, _) => "Fecha inválida.",
            (ValidationErrorKind::OutOfRange, Field::StartDate | Field::EndDate) => {
                "La fecha debe estar entre 01/01/1900 y hoy."
            }
            (ValidationErrorKind::OutOfRange, _) => "El valor es demasiado grande.",
            (ValidationErrorKind::InvalidRange, _) => {
                "La fecha de paga no puede ser anterior a la fecha de inicio."
            }
        }
    }
}

/// The set of invalid fields for one validation pass.
///
/// # Example
///
/// ```
/// use aguinaldo_engine::models::{Field, FieldErrors, ValidationErrorKind};
///
/// let mut errors = FieldErrors::new();
/// errors.insert(Field::MonthlySalary, ValidationErrorKind::NotPositive);
/// assert_eq!(errors.message(Field::MonthlySalary), Some("Debe ser mayor a 0."));
/// assert_eq!(errors.message(Field::BonusDays), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, ValidationErrorKind>,
}

impl FieldErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for a field, replacing any previous one.
    pub fn insert(&mut self, field: Field, kind: ValidationErrorKind) {
        self.errors.insert(field, kind);
    }

    /// Removes the error for a field, if any.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    /// Returns the error kind for a field, if any.
    pub fn get(&self, field: Field) -> Option<ValidationErrorKind> {
        self.errors.get(&field).copied()
    }

    /// Returns the user-facing message for a field, if it is invalid.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|kind| kind.message_for(field))
    }

    /// Returns true when no field is invalid.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of invalid fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over invalid fields in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationErrorKind)> + '_ {
        self.errors.iter().map(|(field, kind)| (*field, *kind))
    }

    /// Returns field name to message pairs, as shown next to each field.
    pub fn to_messages(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(field, kind)| (field.as_str().to_string(), kind.message_for(field).to_string()))
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, kind) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, kind.message_for(field))?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_messages().serialize(serializer)
    }
}
