// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup order, later overriding earlier: compiled defaults,
//! `/etc/lingo/lingo.toml`, `~/.config/lingo/lingo.toml`, `./lingo.toml`,
//! then `LINGO_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::LingoConfig;

/// Sections that may appear as the first segment of a `LINGO_*` variable.
const ENV_SECTIONS: &[&str] = &[
    "assistant",
    "openai",
    "claude",
    "zhipu",
    "deepseek",
    "siliconflow",
    "gemini",
    "kimi",
    "azure",
];

/// Config files consulted by [`load_config`], lowest priority first.
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/lingo/lingo.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("lingo").join("lingo.toml"));
    }
    paths.push(PathBuf::from("lingo.toml"));
    paths
}

/// Build the Figment for the standard hierarchy without extracting it.
pub fn build_figment() -> Figment {
    config_file_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(LingoConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<LingoConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only. No files, no environment.
pub fn load_config_from_str(toml_content: &str) -> Result<LingoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LingoConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LingoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LingoConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Maps `LINGO_<SECTION>_<KEY>` to `<section>.<key>`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `LINGO_OPENAI_API_KEY` maps to `openai.api_key`, not `openai.api.key`.
fn env_provider() -> Env {
    Env::prefixed("LINGO_").map(|key| map_env_key(key.as_str()).into())
}

pub(crate) fn map_env_key(key: &str) -> String {
    for section in ENV_SECTIONS {
        if let Some(rest) = key.strip_prefix(section)
            && let Some(field) = rest.strip_prefix('_')
        {
            return format!("{section}.{field}");
        }
    }
    key.to_string()
}
