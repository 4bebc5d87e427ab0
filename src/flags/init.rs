// SPDX-License-Identifier: MIT
//! Fetch-once flag initialization.
//!
//! [`FlagInitializer::ensure_initialized`] runs on every page navigation
//! and is cheap once the store is server-initialized. Until then it holds
//! a single-flight lock, waits the configured artificial delay, fetches
//! from the upstream source, and adopts the result. A failed fetch leaves
//! the store untouched so the next navigation retries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use super::source::FlagSource;
use super::store::FlagStore;

pub struct FlagInitializer {
    store: Arc<FlagStore>,
    /// None when no upstream is configured — local defaults stay in force
    /// and navigation pays no delay.
    source: Option<Arc<dyn FlagSource>>,
    /// Artificial wait before the first fetch (a splash/loading window,
    /// not a fetch timeout).
    delay: Duration,
    // Single-flight guard: concurrent callers queue here and re-check the
    // store after acquiring, so at most one fetch is in flight.
    inflight: Mutex<()>,
}

impl FlagInitializer {
    pub fn new(
        store: Arc<FlagStore>,
        source: Option<Arc<dyn FlagSource>>,
        delay: Duration,
    ) -> Self {
        Self {
            store,
            source,
            delay,
            inflight: Mutex::new(()),
        }
    }

    /// Idempotent, safe to call concurrently from any number of
    /// navigations. Performs at most one fetch at a time, and none at all
    /// once the store is server-initialized.
    pub async fn ensure_initialized(&self) {
        if self.store.is_server_initialized().await {
            return;
        }
        let Some(source) = &self.source else {
            return;
        };

        let _guard = self.inflight.lock().await;
        // Another caller may have finished while we waited for the lock.
        if self.store.is_server_initialized().await {
            return;
        }

        tokio::time::sleep(self.delay).await;

        match source.fetch().await {
            Some(features) => self.store.replace(features).await,
            None => {
                debug!("no authoritative flags available — keeping local defaults");
            }
        }
    }
}
