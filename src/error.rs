//! Error types for the aguinaldo engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur outside the pure formulas.

use thiserror::Error;

use crate::models::FieldErrors;

/// The main error type for the aguinaldo engine.
///
/// # Example
///
/// ```
/// use aguinaldo_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// One or more input fields were rejected.
    #[error("Validation failed: {errors}")]
    Validation {
        /// The invalid fields and why.
        errors: FieldErrors,
    },

    /// The display preference file could not be written.
    #[error("Failed to write preferences '{path}': {message}")]
    PreferenceWriteError {
        /// The path of the preference file.
        path: String,
        /// A description of the write error.
        message: String,
    },
}

impl From<FieldErrors> for EngineError {
    fn from(errors: FieldErrors) -> Self {
        EngineError::Validation { errors }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, ValidationErrorKind};

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_validation_displays_field_messages() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::MonthlySalary, ValidationErrorKind::NotPositive);
        let error: EngineError = errors.into();

        assert_eq!(
            error.to_string(),
            "Validation failed: monthly_salary: Debe ser mayor a 0."
        );
    }

    #[test]
    fn test_preference_write_error_displays_path_and_message() {
        let error = EngineError::PreferenceWriteError {
            path: "/readonly/preferences.yaml".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write preferences '/readonly/preferences.yaml': permission denied"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
