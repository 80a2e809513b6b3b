// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider registry for the Lingo assistant core.
//!
//! The registry maps the configured [`ProviderType`] to a live adapter,
//! creating adapters lazily through a [`ProviderFactory`] and caching one per
//! type until [`ProviderRegistry::invalidate`] is called.

pub mod factory;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lingo_config::{LingoConfig, LiveSettings, SettingsSource};
use lingo_core::{ProviderAdapter, ProviderType};
use strum::IntoEnumIterator;
use tracing::{debug, info};

pub use factory::{DefaultFactory, ProviderFactory};

type AdapterCache = HashMap<ProviderType, Arc<dyn ProviderAdapter>>;

pub struct ProviderRegistry {
    settings: Arc<LiveSettings>,
    factory: Box<dyn ProviderFactory>,
    cache: Mutex<AdapterCache>,
}

impl ProviderRegistry {
    /// Registry using the built-in vendor adapters.
    pub fn new(settings: Arc<LiveSettings>) -> Self {
        Self::with_factory(settings, DefaultFactory)
    }

    pub fn with_factory(settings: Arc<LiveSettings>, factory: impl ProviderFactory + 'static) -> Self {
        Self {
            settings,
            factory: Box::new(factory),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Shared settings handle adapters read from.
    pub fn settings(&self) -> &Arc<LiveSettings> {
        &self.settings
    }

    /// The provider type selected in the current configuration.
    pub fn resolve_active_type(&self) -> ProviderType {
        self.settings.current().assistant.provider
    }

    /// Adapter for the active provider.
    pub fn get(&self) -> Arc<dyn ProviderAdapter> {
        self.get_for(self.resolve_active_type())
    }

    /// Adapter for `provider`, created on first request and reused afterwards.
    pub fn get_for(&self, provider: ProviderType) -> Arc<dyn ProviderAdapter> {
        let mut cache = self.lock();
        if let Some(adapter) = cache.get(&provider) {
            return Arc::clone(adapter);
        }
        let settings: Arc<dyn SettingsSource> = self.settings.clone();
        let adapter = self.factory.create(provider, settings);
        debug!(provider = %provider, "provider adapter created");
        cache.insert(provider, Arc::clone(&adapter));
        adapter
    }

    /// Drops every cached adapter. The next lookup builds a fresh one from
    /// the current settings. Callers holding an adapter keep using it.
    pub fn invalidate(&self) {
        let dropped = {
            let mut cache = self.lock();
            let count = cache.len();
            cache.clear();
            count
        };
        info!(dropped, "provider cache invalidated");
    }

    /// Publishes new settings and invalidates the cache.
    pub fn reload(&self, config: LingoConfig) {
        self.settings.replace(config);
        self.invalidate();
    }

    /// Provider types currently holding a live adapter, in declaration order.
    pub fn cached_types(&self) -> Vec<ProviderType> {
        let cache = self.lock();
        ProviderType::iter()
            .filter(|ty| cache.contains_key(ty))
            .collect()
    }

    /// Display name of the active provider, for prompting the user to configure it.
    pub fn active_display_name(&self) -> &'static str {
        self.resolve_active_type().display_name()
    }

    /// Settings key the user must fill in for the active provider.
    pub fn active_settings_key(&self) -> String {
        self.resolve_active_type().settings_key()
    }

    fn lock(&self) -> MutexGuard<'_, AdapterCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("active", &self.resolve_active_type())
            .field("cached", &self.cached_types())
            .finish()
    }
}
