// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently leaving a provider unconfigured.

use lingo_core::{ProviderConfig, ProviderType};
use serde::{Deserialize, Serialize};

/// Top-level Lingo configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LingoConfig {
    /// Provider selection and per-call defaults.
    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub openai: VendorConfig,

    #[serde(default)]
    pub claude: VendorConfig,

    #[serde(default)]
    pub zhipu: VendorConfig,

    #[serde(default)]
    pub deepseek: VendorConfig,

    #[serde(default)]
    pub siliconflow: VendorConfig,

    #[serde(default)]
    pub gemini: VendorConfig,

    #[serde(default)]
    pub kimi: VendorConfig,

    /// Azure OpenAI: `base_url` is the resource endpoint, `deployment_name` the model deployment.
    #[serde(default)]
    pub azure: VendorConfig,
}

/// Assistant-wide settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// Active provider type.
    #[serde(default)]
    pub provider: ProviderType,

    /// Target language code for translation (zh, en, ja, ko, fr, de, es, ru).
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Number of naming suggestions to request.
    #[serde(default = "default_naming_count")]
    pub naming_count: usize,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::default(),
            target_language: default_target_language(),
            naming_count: default_naming_count(),
            log_level: default_log_level(),
        }
    }
}

fn default_target_language() -> String {
    "zh".to_string()
}

fn default_naming_count() -> usize {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Credentials and endpoint for one vendor. Unset fields fall back to vendor defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VendorConfig {
    /// API key. `None` leaves the provider unconfigured.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Endpoint override (proxies, self-hosted gateways, Azure resources).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Model identifier override.
    #[serde(default)]
    pub model: Option<String>,

    /// Azure deployment name.
    #[serde(default)]
    pub deployment_name: Option<String>,
}

impl LingoConfig {
    /// Returns the settings section for a provider.
    pub fn vendor(&self, provider: ProviderType) -> &VendorConfig {
        match provider {
            ProviderType::Openai => &self.openai,
            ProviderType::Claude => &self.claude,
            ProviderType::Zhipu => &self.zhipu,
            ProviderType::Deepseek => &self.deepseek,
            ProviderType::Siliconflow => &self.siliconflow,
            ProviderType::Gemini => &self.gemini,
            ProviderType::Kimi => &self.kimi,
            ProviderType::Azure => &self.azure,
        }
    }

    pub fn vendor_mut(&mut self, provider: ProviderType) -> &mut VendorConfig {
        match provider {
            ProviderType::Openai => &mut self.openai,
            ProviderType::Claude => &mut self.claude,
            ProviderType::Zhipu => &mut self.zhipu,
            ProviderType::Deepseek => &mut self.deepseek,
            ProviderType::Siliconflow => &mut self.siliconflow,
            ProviderType::Gemini => &mut self.gemini,
            ProviderType::Kimi => &mut self.kimi,
            ProviderType::Azure => &mut self.azure,
        }
    }

    /// Resolves a provider's connection settings against vendor defaults.
    ///
    /// Blank strings count as unset.
    pub fn provider_config(&self, provider: ProviderType) -> ProviderConfig {
        let vendor = self.vendor(provider);
        ProviderConfig {
            provider,
            api_key: non_blank(&vendor.api_key),
            base_url: non_blank(&vendor.base_url)
                .or_else(|| provider.default_base_url().map(String::from)),
            model: non_blank(&vendor.model).unwrap_or_else(|| provider.default_model().to_string()),
            deployment_name: non_blank(&vendor.deployment_name),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
