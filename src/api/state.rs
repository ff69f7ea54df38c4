//! Application state for the aguinaldo API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::config::ConfigLoader;
use crate::format::LocaleCurrencyFormatter;
use crate::validation::{DateWindow, InputValidator};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the loaded configuration and the currency formatter built from it.
/// Everything is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    formatter: Arc<LocaleCurrencyFormatter>,
    fixed_today: Option<NaiveDate>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let formatter = config.currency_formatter();
        Self {
            config: Arc::new(config),
            formatter: Arc::new(formatter),
            fixed_today: None,
        }
    }

    /// Pins the date treated as today instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the currency formatter for the configured locale.
    pub fn formatter(&self) -> &LocaleCurrencyFormatter {
        &self.formatter
    }

    /// Returns the current local date, or the pinned one.
    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Builds a validator for the selectable date window as of today.
    pub fn validator(&self) -> InputValidator {
        InputValidator::new(DateWindow::default(), self.today())
    }
}
