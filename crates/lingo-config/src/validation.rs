// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks that serde attributes cannot express.
//!
//! Missing API keys are not validated here: an unconfigured provider is a
//! normal state and is reported per call as a configuration error.

use lingo_core::ProviderType;
use strum::IntoEnumIterator;

use crate::diagnostic::ConfigError;
use crate::model::LingoConfig;

/// Upper bound for `assistant.naming_count`.
pub const MAX_NAMING_COUNT: usize = 20;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validates a deserialized configuration, collecting every failure.
pub fn validate_config(config: &LingoConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let assistant = &config.assistant;

    if !(1..=MAX_NAMING_COUNT).contains(&assistant.naming_count) {
        errors.push(ConfigError::Validation {
            message: format!(
                "assistant.naming_count must be between 1 and {MAX_NAMING_COUNT}, got {}",
                assistant.naming_count
            ),
        });
    }

    if assistant.target_language.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "assistant.target_language must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&assistant.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "assistant.log_level `{}` is not one of: {}",
                assistant.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    for provider in ProviderType::iter() {
        if let Some(url) = config.vendor(provider).base_url.as_deref().map(str::trim)
            && !url.is_empty()
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            errors.push(ConfigError::Validation {
                message: format!("{provider}.base_url `{url}` must start with http:// or https://"),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
