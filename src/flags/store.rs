//! In-memory feature-flag store.
//!
//! One instance lives in [`crate::AppContext`] for the process lifetime,
//! seeded from the compiled-in defaults. A successful upstream fetch
//! replaces the whole set exactly once; there is no per-key merge.

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::model::FeatureFlagSet;

#[derive(Debug, Default)]
struct ConfigState {
    features: FeatureFlagSet,
    initialized_from_server: bool,
}

/// Shared flag state behind an async RwLock.
///
/// `initialized_from_server` is monotonic: it starts false and only
/// [`FlagStore::replace`] with a non-empty set flips it to true. Nothing
/// resets it for the lifetime of the process.
#[derive(Debug)]
pub struct FlagStore {
    state: RwLock<ConfigState>,
}

impl FlagStore {
    pub fn new(seed: FeatureFlagSet) -> Self {
        Self {
            state: RwLock::new(ConfigState {
                features: seed,
                initialized_from_server: false,
            }),
        }
    }

    /// Snapshot of the current flag set.
    pub async fn read(&self) -> FeatureFlagSet {
        self.state.read().await.features.clone()
    }

    pub async fn is_server_initialized(&self) -> bool {
        self.state.read().await.initialized_from_server
    }

    /// Replace the whole set and mark the store server-initialized, both
    /// under the same write lock.
    ///
    /// An empty set is a no-op: a failed or degenerate fetch must not
    /// clobber valid local defaults, and must not flip the initialized
    /// bit either (so a later call retries).
    pub async fn replace(&self, new_set: FeatureFlagSet) {
        if new_set.is_empty() {
            debug!("ignoring empty flag set — keeping current state");
            return;
        }
        let mut state = self.state.write().await;
        state.features = new_set;
        if !state.initialized_from_server {
            info!(
                features = state.features.len(),
                "flag store initialized from server"
            );
        }
        state.initialized_from_server = true;
    }
}
