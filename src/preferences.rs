//! Display preferences.
//!
//! The colour theme is process-wide display state, loaded once at startup
//! and written back whenever it changes. Nothing in the calculation path
//! reads it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};

/// The colour theme the user picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the operating system.
    #[default]
    System,
}

/// Persisted preference file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// The selected theme.
    #[serde(default)]
    pub theme: ThemePreference,
}

/// Loads preferences from a YAML file and persists every change.
///
/// # Example
///
/// ```no_run
/// use aguinaldo_engine::preferences::{PreferenceStore, ThemePreference};
///
/// let mut store = PreferenceStore::load("./preferences.yaml");
/// store.set_theme(ThemePreference::Dark)?;
/// # Ok::<(), aguinaldo_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    preferences: Preferences,
}

impl PreferenceStore {
    /// Loads preferences from `path`.
    ///
    /// A missing or unreadable file yields the defaults; preferences never
    /// prevent the calculator from starting.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let preferences = match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Ignoring malformed preferences");
                Preferences::default()
            }),
            Err(_) => {
                debug!(path = %path.display(), "No stored preferences, using defaults");
                Preferences::default()
            }
        };

        Self { path, preferences }
    }

    /// Returns the current preferences.
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Returns the current theme.
    pub fn theme(&self) -> ThemePreference {
        self.preferences.theme
    }

    /// Changes the theme and writes it to disk.
    ///
    /// Setting the theme it already has does not touch the file. The
    /// in-memory theme only changes once the file has been written.
    pub fn set_theme(&mut self, theme: ThemePreference) -> EngineResult<()> {
        if self.preferences.theme == theme {
            return Ok(());
        }

        let candidate = Preferences { theme };
        self.persist(&candidate)?;
        self.preferences = candidate;
        info!(theme = ?theme, "Theme preference changed");
        Ok(())
    }

    fn persist(&self, preferences: &Preferences) -> EngineResult<()> {
        let path_str = self.path.display().to_string();

        let content =
            serde_yaml::to_string(preferences).map_err(|e| EngineError::PreferenceWriteError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| EngineError::PreferenceWriteError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
