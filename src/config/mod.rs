//! Configuration loading and management for the aguinaldo engine.
//!
//! This module loads the engine metadata, statutory policy, and display
//! settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use aguinaldo_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/aguinaldo").unwrap();
//! println!("Rules: {}", config.engine().legal_ref);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AguinaldoConfig, DisplayConfig, EngineMetadata, PaymentDeadline, PolicyConfig};
