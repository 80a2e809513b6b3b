// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the provider contract, adapters, and registry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::LingoError;

/// Identifies an LLM backend. Selects both the adapter and its settings section.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProviderType {
    #[default]
    Openai,
    Claude,
    Zhipu,
    Deepseek,
    Siliconflow,
    Gemini,
    Kimi,
    Azure,
}

/// Wire protocol family an adapter speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolFamily {
    /// `/chat/completions` with SSE streaming.
    OpenAiCompatible,
    /// Anthropic Messages API.
    Anthropic,
    /// Google `generateContent`.
    Gemini,
}

/// How an adapter delivers translation text through a [`crate::StreamSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamingMode {
    /// Chunks arrive as the vendor produces tokens.
    Incremental,
    /// One chunk holding the complete text, then completion.
    OneShot,
}

/// Capability flags reported by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub streaming: StreamingMode,
    /// Whether the vendor offers a JSON-constrained output mode.
    pub json_mode: bool,
}

impl ProviderType {
    /// Human-readable name for status output and error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderType::Openai => "OpenAI",
            ProviderType::Claude => "Claude (Anthropic)",
            ProviderType::Zhipu => "Zhipu GLM",
            ProviderType::Deepseek => "DeepSeek",
            ProviderType::Siliconflow => "SiliconFlow",
            ProviderType::Gemini => "Google Gemini",
            ProviderType::Kimi => "Kimi (Moonshot)",
            ProviderType::Azure => "Azure OpenAI",
        }
    }

    /// Settings key the user must fill in to configure this provider.
    pub fn settings_key(self) -> String {
        format!("{self}.api_key")
    }

    pub fn family(self) -> ProtocolFamily {
        match self {
            ProviderType::Claude => ProtocolFamily::Anthropic,
            ProviderType::Gemini => ProtocolFamily::Gemini,
            _ => ProtocolFamily::OpenAiCompatible,
        }
    }

    /// Vendor default endpoint. `None` means the user must supply one.
    pub fn default_base_url(self) -> Option<&'static str> {
        match self {
            ProviderType::Openai => Some("https://api.openai.com/v1"),
            ProviderType::Claude => Some("https://api.anthropic.com"),
            ProviderType::Zhipu => Some("https://open.bigmodel.cn/api/paas/v4"),
            ProviderType::Deepseek => Some("https://api.deepseek.com/v1"),
            ProviderType::Siliconflow => Some("https://api.siliconflow.cn/v1"),
            ProviderType::Gemini => Some("https://generativelanguage.googleapis.com/v1beta"),
            ProviderType::Kimi => Some("https://api.moonshot.cn/v1"),
            ProviderType::Azure => None,
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            ProviderType::Openai => "gpt-4o-mini",
            ProviderType::Claude => "claude-sonnet-4-20250514",
            ProviderType::Zhipu => "glm-4-flash",
            ProviderType::Deepseek => "deepseek-chat",
            ProviderType::Siliconflow => "Qwen/Qwen2.5-7B-Instruct",
            ProviderType::Gemini => "gemini-2.5-flash",
            ProviderType::Kimi => "moonshot-v1-8k",
            ProviderType::Azure => "gpt-4",
        }
    }

    /// Capabilities of the built-in adapter for this provider.
    pub fn capabilities(self) -> Capabilities {
        match self.family() {
            ProtocolFamily::OpenAiCompatible => Capabilities {
                streaming: StreamingMode::Incremental,
                json_mode: true,
            },
            ProtocolFamily::Anthropic => Capabilities {
                streaming: StreamingMode::OneShot,
                json_mode: false,
            },
            ProtocolFamily::Gemini => Capabilities {
                streaming: StreamingMode::OneShot,
                json_mode: true,
            },
        }
    }
}

/// Connection settings for one provider, resolved against vendor defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub provider: ProviderType,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub deployment_name: Option<String>,
}

impl ProviderConfig {
    /// Returns the API key, or a configuration error when it is missing or blank.
    pub fn require_api_key(&self) -> Result<&str, LingoError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(LingoError::missing_credentials(
                self.provider.display_name(),
                &self.provider.settings_key(),
            )),
        }
    }

    /// Returns the endpoint with any trailing slash removed.
    pub fn require_base_url(&self) -> Result<&str, LingoError> {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url.trim_end_matches('/')),
            _ => Err(LingoError::Config(format!(
                "{} needs an endpoint; set `{}.base_url` in lingo.toml",
                self.provider.display_name(),
                self.provider
            ))),
        }
    }

    /// Model identifier sent on the wire. Azure routes by deployment name.
    pub fn wire_model(&self) -> &str {
        match (&self.provider, &self.deployment_name) {
            (ProviderType::Azure, Some(deployment)) if !deployment.trim().is_empty() => deployment,
            _ => &self.model,
        }
    }
}

/// One identifier suggestion. The interchange shape shared by all vendors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingSuggestion {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub description: String,
}
