// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the Lingo assistant core.
//!
//! `lingo.toml` is parsed strictly (`deny_unknown_fields`), layered over the
//! XDG file hierarchy, overridden by `LINGO_*` environment variables, and
//! reported through miette diagnostics with typo suggestions.
//!
//! ```no_run
//! use lingo_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("active provider: {}", config.assistant.provider);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod settings;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AssistantConfig, LingoConfig, VendorConfig};
pub use settings::{LiveSettings, SettingsSource};

/// Loads the standard hierarchy and validates it.
pub fn load_and_validate() -> Result<LingoConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => validated(config),
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Loads a TOML string (no files, no environment) and validates it.
pub fn load_and_validate_str(toml_content: &str) -> Result<LingoConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => validated(config),
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Loads one explicit file plus environment overrides and validates it.
pub fn load_and_validate_path(path: &Path) -> Result<LingoConfig, Vec<ConfigError>> {
    if !path.exists() {
        return Err(vec![ConfigError::Other(format!(
            "config file {} does not exist",
            path.display()
        ))]);
    }
    match loader::load_config_from_path(path) {
        Ok(config) => validated(config),
        Err(err) => {
            let sources: Vec<_> = std::fs::read_to_string(path)
                .map(|content| (path.display().to_string(), content))
                .into_iter()
                .collect();
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

fn validated(config: LingoConfig) -> Result<LingoConfig, Vec<ConfigError>> {
    validation::validate_config(&config)?;
    tracing::debug!(provider = %config.assistant.provider, "configuration loaded");
    Ok(config)
}

fn collect_toml_sources() -> Vec<(String, String)> {
    loader::config_file_paths()
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            let display = std::path::absolute(&path).unwrap_or(path);
            Some((display.display().to_string(), content))
        })
        .collect()
}
