// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Live settings handle shared by adapters and the registry.
//!
//! Adapters read credentials through [`SettingsSource::current`] each time they
//! build a transport client, so a settings change takes effect after the
//! registry invalidates its cache.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use crate::model::LingoConfig;

/// Read access to the current configuration snapshot.
pub trait SettingsSource: Send + Sync {
    fn current(&self) -> Arc<LingoConfig>;
}

/// Settings held in an [`ArcSwap`] so readers never block writers.
#[derive(Debug)]
pub struct LiveSettings {
    inner: ArcSwap<LingoConfig>,
}

impl LiveSettings {
    pub fn new(config: LingoConfig) -> Self {
        Self {
            inner: ArcSwap::from_pointee(config),
        }
    }

    /// Publishes a new snapshot. Readers holding the previous one keep it.
    pub fn replace(&self, config: LingoConfig) {
        debug!(provider = %config.assistant.provider, "settings replaced");
        self.inner.store(Arc::new(config));
    }

    /// Applies `edit` to a copy of the current snapshot and publishes it.
    pub fn update(&self, edit: impl FnOnce(&mut LingoConfig)) {
        let mut next = LingoConfig::clone(&self.inner.load());
        edit(&mut next);
        self.replace(next);
    }
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self::new(LingoConfig::default())
    }
}

impl SettingsSource for LiveSettings {
    fn current(&self) -> Arc<LingoConfig> {
        self.inner.load_full()
    }
}
