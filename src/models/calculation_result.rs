//! Calculation result models for the aguinaldo engine.
//!
//! This module contains the [`BonusCalculation`] type and the audit structures
//! that explain how a bonus amount was reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Scenario;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one formula step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal provision behind this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that are legal to compute with but likely wrong
/// or non-compliant. They never block a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use aguinaldo_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of one bonus calculation.
///
/// The amount is derived, never stored: a new submission produces a new
/// `BonusCalculation` and the previous one is discarded.
///
/// # Example
///
/// ```
/// use aguinaldo_engine::models::{AuditTrace, BonusCalculation, Scenario};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = BonusCalculation {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     scenario: Scenario::Tenured,
///     bonus_amount: Decimal::new(450000, 2),
///     formatted_amount: "$4,500.00".to_string(),
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// assert_eq!(result.bonus_amount.to_string(), "4500.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Which formula was applied.
    pub scenario: Scenario,
    /// The bonus owed, rounded to 2 decimal places.
    pub bonus_amount: Decimal,
    /// The bonus owed, formatted for display.
    pub formatted_amount: String,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
