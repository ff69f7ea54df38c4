//! Per-scenario form state machine.
//!
//! A [`BonusForm`] owns the raw field values of one scenario, the live
//! field errors, and the last computed result. It has two states:
//!
//! ```text
//!            submit (valid)
//!   Idle ─────────────────────▶ Computed
//!    ▲                              │
//!    └──────── any field edit ──────┘
//! ```
//!
//! Submitting invalid input leaves the form `Idle` and reports every
//! invalid field. Submitting valid input emits a
//! [`FormEvent::ComputationSucceeded`] for the presentation layer.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculation::perform_calculation;
use crate::config::PolicyConfig;
use crate::format::CurrencyFormatter;
use crate::models::{BonusCalculation, Field, FieldErrors, RawBonusInput, Scenario};
use crate::validation::InputValidator;

/// What happens to the input fields after a successful submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Empty every field. The result stays visible until the next edit.
    #[default]
    ClearInputs,
    /// Keep the submitted values in place.
    PreserveInputs,
}

/// Events the form emits for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A submission produced a result; the celebration effect may play.
    ComputationSucceeded {
        /// The scenario that was computed.
        scenario: Scenario,
        /// The bonus owed.
        amount: Decimal,
        /// The bonus owed, formatted for display.
        formatted_amount: String,
    },
}

/// Receives form events.
pub trait FormEventSink {
    /// Handles one event.
    fn emit(&mut self, event: FormEvent);
}

impl FormEventSink for Vec<FormEvent> {
    fn emit(&mut self, event: FormEvent) {
        self.push(event);
    }
}

/// The state of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// No result, or inputs edited since the last result.
    Idle,
    /// A result is displayed.
    Computed(BonusCalculation),
}

/// The form for one bonus scenario.
///
/// # Example
///
/// ```
/// use aguinaldo_engine::config::PolicyConfig;
/// use aguinaldo_engine::form::{BonusForm, FormEvent, FormState};
/// use aguinaldo_engine::format::LocaleCurrencyFormatter;
/// use aguinaldo_engine::models::{Field, Scenario};
/// use aguinaldo_engine::validation::{DateWindow, InputValidator};
/// use chrono::NaiveDate;
///
/// let validator = InputValidator::new(
///     DateWindow::default(),
///     NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
/// );
/// let mut form = BonusForm::new(
///     Scenario::Tenured,
///     validator,
///     PolicyConfig::default(),
///     LocaleCurrencyFormatter::default(),
/// );
/// form.set_field(Field::MonthlySalary, "9000");
/// form.set_field(Field::BonusDays, "15");
///
/// let mut events: Vec<FormEvent> = Vec::new();
/// let result = form.submit(&mut events).unwrap();
/// assert_eq!(result.formatted_amount, "$4,500.00");
/// assert!(matches!(form.state(), FormState::Computed(_)));
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BonusForm<F: CurrencyFormatter> {
    raw: RawBonusInput,
    touched: BTreeSet<Field>,
    errors: FieldErrors,
    state: FormState,
    validator: InputValidator,
    policy: PolicyConfig,
    formatter: F,
    reset_policy: ResetPolicy,
}

impl<F: CurrencyFormatter> BonusForm<F> {
    /// Creates an empty, idle form for `scenario`.
    pub fn new(
        scenario: Scenario,
        validator: InputValidator,
        policy: PolicyConfig,
        formatter: F,
    ) -> Self {
        Self {
            raw: RawBonusInput::empty(scenario),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            state: FormState::Idle,
            validator,
            policy,
            formatter,
            reset_policy: ResetPolicy::default(),
        }
    }

    /// Sets what happens to the inputs after a successful submission.
    pub fn with_reset_policy(mut self, reset_policy: ResetPolicy) -> Self {
        self.reset_policy = reset_policy;
        self
    }

    /// Returns the scenario of this form.
    pub fn scenario(&self) -> Scenario {
        self.raw.scenario()
    }

    /// Returns the current raw text of a field.
    pub fn value(&self, field: Field) -> Option<&str> {
        self.raw.value(field)
    }

    /// Returns the raw input as currently entered.
    pub fn raw_input(&self) -> &RawBonusInput {
        &self.raw
    }

    /// Returns the live field errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the displayed result, if any.
    pub fn result(&self) -> Option<&BonusCalculation> {
        match &self.state {
            FormState::Computed(result) => Some(result),
            FormState::Idle => None,
        }
    }

    /// Updates a field and re-validates the touched fields.
    ///
    /// Editing any field returns the form to `Idle`. Returns the live error
    /// message for the edited field, if it is invalid. Fields that do not
    /// belong to this form's scenario are ignored.
    pub fn set_field(&mut self, field: Field, raw: impl Into<String>) -> Option<&'static str> {
        let scenario = self.scenario();
        let Some(slot) = self.raw.slot_mut(field) else {
            warn!(
                field = field.as_str(),
                scenario = scenario.as_str(),
                "Ignoring field that is not part of this form"
            );
            return None;
        };
        *slot = Some(raw.into());

        self.touched.insert(field);
        self.state = FormState::Idle;
        self.revalidate_touched();
        self.errors.message(field)
    }

    /// Empties a field, as when the user deletes its contents.
    pub fn clear_field(&mut self, field: Field) -> Option<&'static str> {
        let slot = self.raw.slot_mut(field)?;
        *slot = None;

        self.touched.insert(field);
        self.state = FormState::Idle;
        self.revalidate_touched();
        self.errors.message(field)
    }

    /// Submits the form.
    ///
    /// On valid input this computes the bonus, moves to `Computed`, emits
    /// [`FormEvent::ComputationSucceeded`] into `sink`, and then applies the
    /// reset policy. On invalid input every field is marked touched, so
    /// later edits get live feedback, and all field errors are returned.
    pub fn submit<S>(&mut self, sink: &mut S) -> Result<BonusCalculation, FieldErrors>
    where
        S: FormEventSink + ?Sized,
    {
        let scenario = self.scenario();
        self.touched.extend(scenario.fields().iter().copied());

        let input = match self.validator.validate(&self.raw) {
            Ok(input) => input,
            Err(errors) => {
                debug!(
                    scenario = scenario.as_str(),
                    invalid_fields = errors.len(),
                    "Submission blocked by validation"
                );
                self.errors = errors.clone();
                self.state = FormState::Idle;
                return Err(errors);
            }
        };

        let result = perform_calculation(&input, &self.policy, &self.formatter);
        self.errors = FieldErrors::new();
        self.state = FormState::Computed(result.clone());

        sink.emit(FormEvent::ComputationSucceeded {
            scenario: result.scenario,
            amount: result.bonus_amount,
            formatted_amount: result.formatted_amount.clone(),
        });

        if self.reset_policy == ResetPolicy::ClearInputs {
            self.raw = RawBonusInput::empty(scenario);
            self.touched.clear();
        }

        Ok(result)
    }

    fn revalidate_touched(&mut self) {
        for field in self.scenario().fields() {
            if !self.touched.contains(field) {
                continue;
            }
            match self.validator.validate_field(&self.raw, *field) {
                Some(kind) => self.errors.insert(*field, kind),
                None => self.errors.clear(*field),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LocaleCurrencyFormatter;
    use crate::models::ValidationErrorKind;
    use crate::validation::DateWindow;
    use chrono::NaiveDate;

    fn form(scenario: Scenario) -> BonusForm<LocaleCurrencyFormatter> {
        let validator = InputValidator::new(
            DateWindow::default(),
            NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
        );
        BonusForm::new(
            scenario,
            validator,
            PolicyConfig::default(),
            LocaleCurrencyFormatter::default(),
        )
    }

    fn filled_tenured() -> BonusForm<LocaleCurrencyFormatter> {
        let mut form = form(Scenario::Tenured);
        form.set_field(Field::MonthlySalary, "9000");
        form.set_field(Field::BonusDays, "15");
        form
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = form(Scenario::NewHire);
        assert_eq!(form.state(), &FormState::Idle);
        assert!(form.errors().is_empty());
        assert_eq!(form.value(Field::StartDate), None);
        assert!(form.result().is_none());
    }

    #[test]
    fn test_live_validation_only_reports_touched_fields() {
        let mut form = form(Scenario::Tenured);
        let message = form.set_field(Field::MonthlySalary, "0");

        assert_eq!(message, Some("Debe ser mayor a 0."));
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.errors().get(Field::BonusDays), None);
    }

    #[test]
    fn test_fixing_a_field_clears_its_error() {
        let mut form = form(Scenario::Tenured);
        form.set_field(Field::MonthlySalary, "abc");
        let message = form.set_field(Field::MonthlySalary, "9000");

        assert_eq!(message, None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_clear_field_reports_missing() {
        let mut form = filled_tenured();
        assert_eq!(form.clear_field(Field::BonusDays), Some("Campo requerido"));
    }

    #[test]
    fn test_invalid_submit_reports_all_fields_and_emits_nothing() {
        let mut form = form(Scenario::NewHire);
        let mut events: Vec<FormEvent> = Vec::new();

        let errors = form.submit(&mut events).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::StartDate), Some(ValidationErrorKind::Missing));
        assert_eq!(form.state(), &FormState::Idle);
        assert!(events.is_empty());
        assert_eq!(form.errors(), &errors);
    }

    #[test]
    fn test_valid_submit_computes_and_emits_event() {
        let mut form = filled_tenured();
        let mut events: Vec<FormEvent> = Vec::new();

        let result = form.submit(&mut events).unwrap();

        assert_eq!(result.bonus_amount.to_string(), "4500.00");
        assert_eq!(form.result(), Some(&result));
        assert_eq!(
            events,
            vec![FormEvent::ComputationSucceeded {
                scenario: Scenario::Tenured,
                amount: result.bonus_amount,
                formatted_amount: "$4,500.00".to_string(),
            }]
        );
    }

    #[test]
    fn test_default_policy_clears_inputs_but_keeps_result() {
        let mut form = filled_tenured();
        form.submit(&mut Vec::<FormEvent>::new()).unwrap();

        assert_eq!(form.value(Field::MonthlySalary), None);
        assert_eq!(form.value(Field::BonusDays), None);
        assert!(matches!(form.state(), FormState::Computed(_)));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_preserve_policy_keeps_inputs() {
        let mut form = filled_tenured().with_reset_policy(ResetPolicy::PreserveInputs);
        form.submit(&mut Vec::<FormEvent>::new()).unwrap();

        assert_eq!(form.value(Field::MonthlySalary), Some("9000"));
        assert_eq!(form.value(Field::BonusDays), Some("15"));
    }

    #[test]
    fn test_edit_after_compute_returns_to_idle() {
        let mut form = filled_tenured().with_reset_policy(ResetPolicy::PreserveInputs);
        form.submit(&mut Vec::<FormEvent>::new()).unwrap();

        form.set_field(Field::BonusDays, "20");

        assert_eq!(form.state(), &FormState::Idle);
        assert!(form.result().is_none());
    }

    #[test]
    fn test_resubmit_replaces_result() {
        let mut form = filled_tenured().with_reset_policy(ResetPolicy::PreserveInputs);
        let first = form.submit(&mut Vec::<FormEvent>::new()).unwrap();
        form.set_field(Field::BonusDays, "30");
        let second = form.submit(&mut Vec::<FormEvent>::new()).unwrap();

        assert_eq!(second.bonus_amount.to_string(), "9000.00");
        assert_ne!(first.calculation_id, second.calculation_id);
        assert_eq!(form.result(), Some(&second));
    }

    #[test]
    fn test_new_hire_submit() {
        let mut form = form(Scenario::NewHire);
        form.set_field(Field::MonthlySalary, "9000");
        form.set_field(Field::StartDate, "2024-01-01");
        form.set_field(Field::EndDate, "2024-12-20");

        let result = form.submit(&mut Vec::<FormEvent>::new()).unwrap();
        assert_eq!(result.bonus_amount.to_string(), "4364.38");
        assert_eq!(result.formatted_amount, "$4,364.38");
    }

    #[test]
    fn test_changing_start_date_revalidates_end_date() {
        let mut form = form(Scenario::NewHire);
        form.set_field(Field::StartDate, "2024-01-01");
        form.set_field(Field::EndDate, "2024-06-01");
        assert!(form.errors().is_empty());

        form.set_field(Field::StartDate, "2024-07-01");

        assert_eq!(
            form.errors().get(Field::EndDate),
            Some(ValidationErrorKind::InvalidRange)
        );
        assert_eq!(form.errors().get(Field::StartDate), None);
    }

    #[test]
    fn test_foreign_field_is_ignored() {
        let mut form = form(Scenario::Tenured);
        assert_eq!(form.set_field(Field::StartDate, "2024-01-01"), None);
        assert_eq!(form.value(Field::StartDate), None);
        assert!(form.errors().is_empty());
    }
}
