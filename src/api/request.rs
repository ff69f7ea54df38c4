//! Request types for the aguinaldo API.
//!
//! This module defines the JSON request bodies accepted by `/calculate`
//! and `/validate`. Field values are raw input: a JSON string or number,
//! exactly as a form would send it. Nothing is checked here beyond shape;
//! the validator decides what the values mean.

use serde::{Deserialize, Serialize};

use crate::models::{RawBonusInput, RawNewHireInput, RawTenuredInput};

/// A raw field value as sent by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Text typed into the field.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
}

impl RawValue {
    fn into_text(self) -> String {
        match self {
            RawValue::Text(text) => text,
            RawValue::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<u64> for RawValue {
    fn from(number: u64) -> Self {
        RawValue::Number(number.into())
    }
}

/// Request body for the tenured scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenuredRequest {
    /// Gross monthly salary.
    #[serde(default)]
    pub monthly_salary: Option<RawValue>,
    /// Days of bonus pay owed.
    #[serde(default)]
    pub bonus_days: Option<RawValue>,
}

/// Request body for the new-hire scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewHireRequest {
    /// Gross monthly salary.
    #[serde(default)]
    pub monthly_salary: Option<RawValue>,
    /// Employment start date, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<RawValue>,
    /// Bonus payment date, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<RawValue>,
}

/// Request body for the `/calculate` and `/validate` endpoints.
///
/// The `scenario` tag selects the formula:
///
/// ```json
/// {"scenario": "tenured", "monthly_salary": 9000, "bonus_days": "15"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum CalculationRequest {
    /// Employee with more than one year at the company.
    Tenured(TenuredRequest),
    /// Employee with less than one year at the company.
    NewHire(NewHireRequest),
}

fn text(value: Option<RawValue>) -> Option<String> {
    value.map(RawValue::into_text)
}

impl From<CalculationRequest> for RawBonusInput {
    fn from(request: CalculationRequest) -> Self {
        match request {
            CalculationRequest::Tenured(req) => RawBonusInput::Tenured(RawTenuredInput {
                monthly_salary: text(req.monthly_salary),
                bonus_days: text(req.bonus_days),
            }),
            CalculationRequest::NewHire(req) => RawBonusInput::NewHire(RawNewHireInput {
                monthly_salary: text(req.monthly_salary),
                start_date: text(req.start_date),
                end_date: text(req.end_date),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Scenario};

    #[test]
    fn test_numbers_and_strings_become_raw_text() {
        let json = r#"{"scenario": "tenured", "monthly_salary": 9000.5, "bonus_days": "15"}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let raw: RawBonusInput = request.into();

        assert_eq!(raw.scenario(), Scenario::Tenured);
        assert_eq!(raw.value(Field::MonthlySalary), Some("9000.5"));
        assert_eq!(raw.value(Field::BonusDays), Some("15"));
    }

    #[test]
    fn test_null_and_missing_fields_are_empty() {
        let json = r#"{"scenario": "new_hire", "monthly_salary": null, "start_date": "2024-01-01"}"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        let raw: RawBonusInput = request.into();

        assert_eq!(raw.value(Field::MonthlySalary), None);
        assert_eq!(raw.value(Field::StartDate), Some("2024-01-01"));
        assert_eq!(raw.value(Field::EndDate), None);
    }

    #[test]
    fn test_unknown_scenario_is_rejected() {
        let json = r#"{"scenario": "contractor", "monthly_salary": 9000}"#;
        assert!(serde_json::from_str::<CalculationRequest>(json).is_err());
    }

    #[test]
    fn test_boolean_value_is_rejected() {
        let json = r#"{"scenario": "tenured", "monthly_salary": true}"#;
        assert!(serde_json::from_str::<CalculationRequest>(json).is_err());
    }

    #[test]
    fn test_request_serializes_with_scenario_tag() {
        let request = CalculationRequest::Tenured(TenuredRequest {
            monthly_salary: Some(9000u64.into()),
            bonus_days: Some("15".into()),
        });
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["scenario"], "tenured");
        assert_eq!(json["monthly_salary"], 9000);
        assert_eq!(json["bonus_days"], "15");
    }
}
