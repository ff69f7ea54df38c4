//! Configuration types for the aguinaldo engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Metadata about the engine and the law it implements.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the calculator.
    pub name: String,
    /// The version or effective date of the rules.
    pub version: String,
    /// The legal provision the formulas implement (e.g., "LFT art. 87").
    pub legal_ref: String,
    /// URL to the legal text.
    pub source_url: String,
}

/// The calendar day by which the bonus must be paid each year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaymentDeadline {
    /// Month of the deadline (1-12).
    pub month: u32,
    /// Day of the deadline.
    pub day: u32,
}

impl PaymentDeadline {
    /// Returns the deadline date within the given year, if it exists.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// Returns true when `date` falls after the deadline of its own year.
    pub fn is_missed_by(&self, date: NaiveDate) -> bool {
        self.in_year(date.year())
            .is_some_and(|deadline| date > deadline)
    }
}

/// Statutory policy from policy.yaml.
///
/// The fifteen statutory bonus days are fixed by law and live in
/// [`crate::calculation::STATUTORY_BONUS_DAYS`], so the formula and the
/// warnings always agree.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// The yearly payment deadline.
    pub payment_deadline: PaymentDeadline,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            payment_deadline: PaymentDeadline { month: 12, day: 20 },
        }
    }
}

/// Display configuration from display.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// The display locale (e.g., "es-MX").
    pub locale: String,
    /// ISO currency code (e.g., "MXN").
    pub currency_code: String,
    /// Symbol prefixed to amounts.
    pub currency_symbol: String,
    /// Separator between groups of three integer digits.
    pub thousands_separator: String,
    /// Separator between integer and fractional digits.
    pub decimal_separator: String,
    /// Number of fractional digits shown.
    pub decimal_places: u32,
    /// Where the theme preference is persisted.
    pub preferences_path: PathBuf,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: "es-MX".to_string(),
            currency_code: "MXN".to_string(),
            currency_symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimal_places: 2,
            preferences_path: PathBuf::from("./preferences.yaml"),
        }
    }
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AguinaldoConfig {
    metadata: EngineMetadata,
    policy: PolicyConfig,
    display: DisplayConfig,
}

impl AguinaldoConfig {
    /// Creates a new AguinaldoConfig from its component parts.
    pub fn new(metadata: EngineMetadata, policy: PolicyConfig, display: DisplayConfig) -> Self {
        Self {
            metadata,
            policy,
            display,
        }
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the statutory policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Returns the display configuration.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }
}
