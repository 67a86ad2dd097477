//! Orb scene configuration.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use stock defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use orb_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{SceneConfig, CONFIG_SCHEMA_VERSION};

use orb_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a commented config file created on first run.
/// An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<SceneConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SceneConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
