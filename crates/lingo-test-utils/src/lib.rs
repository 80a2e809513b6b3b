// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Lingo adapter and registry tests.
//!
//! - [`MockProvider`] - scripted provider adapter
//! - [`RecordingSink`] - stream sink that records every callback
//! - [`sse`] - OpenAI-style SSE response bodies for wiremock
//! - [`settings_for`] - live settings with one provider configured

pub mod mock_provider;
pub mod recording_sink;
pub mod sse;

use std::sync::Arc;

use lingo_config::{LingoConfig, LiveSettings};
use lingo_core::ProviderType;

pub use mock_provider::{MockProvider, MockReply};
pub use recording_sink::{RecordingSink, SinkEvent};

/// Live settings with `provider` active, holding `api_key` and pointing at `base_url`.
pub fn settings_for(provider: ProviderType, api_key: &str, base_url: &str) -> Arc<LiveSettings> {
    let mut config = LingoConfig::default();
    config.assistant.provider = provider;
    let vendor = config.vendor_mut(provider);
    vendor.api_key = Some(api_key.to_string());
    vendor.base_url = Some(base_url.to_string());
    if provider == ProviderType::Azure {
        vendor.deployment_name = Some("test-deployment".to_string());
    }
    Arc::new(LiveSettings::new(config))
}

/// Live settings where `provider` is active but has no API key.
pub fn unconfigured_settings(provider: ProviderType, base_url: &str) -> Arc<LiveSettings> {
    let mut config = LingoConfig::default();
    config.assistant.provider = provider;
    config.vendor_mut(provider).base_url = Some(base_url.to_string());
    Arc::new(LiveSettings::new(config))
}
