// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lazily built transport client shared by the vendor adapters.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::error::LingoError;

/// Holds an adapter's transport client once it has been built.
///
/// A failed build leaves the slot empty so the next call retries with
/// whatever configuration is current then.
pub struct LazyClient<C> {
    slot: ArcSwapOption<C>,
}

impl<C> LazyClient<C> {
    pub fn new() -> Self {
        Self {
            slot: ArcSwapOption::empty(),
        }
    }

    /// Returns the cached client, building and caching it with `build` if absent.
    pub fn get_or_try_init(
        &self,
        build: impl FnOnce() -> Result<C, LingoError>,
    ) -> Result<Arc<C>, LingoError> {
        if let Some(client) = self.slot.load_full() {
            return Ok(client);
        }
        let client = Arc::new(build()?);
        self.slot.store(Some(Arc::clone(&client)));
        Ok(client)
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.load().is_some()
    }
}

impl<C> Default for LazyClient<C> {
    fn default() -> Self {
        Self::new()
    }
}
