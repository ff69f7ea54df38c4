//! Aguinaldo engine for the Mexican year-end bonus
//!
//! This crate calculates the aguinaldo owed under the Ley Federal del Trabajo
//! (art. 87) for two scenarios: employees with more than a year at the company,
//! paid a number of days of salary, and new hires, paid a prorated share of
//! fifteen days for the days actually worked. It also validates raw form input,
//! formats amounts in pesos, and serves both operations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod models;
pub mod preferences;
pub mod validation;
