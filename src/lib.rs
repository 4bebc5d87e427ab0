pub mod config;
pub mod flags;
pub mod guard;
pub mod jobs;
pub mod rest;

use std::sync::Arc;
use std::time::Duration;

use config::ServerConfig;
use flags::init::FlagInitializer;
use flags::source::{FlagSource, HttpFlagSource};
use flags::store::FlagStore;
use guard::RouteGuard;

/// Shared application state passed to every route handler and middleware.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// Flag state seeded from the compiled-in defaults, replaced at most
    /// once by a successful upstream fetch.
    pub flags: Arc<FlagStore>,
    /// Fetch-once initializer, driven by page navigation.
    pub flag_init: Arc<FlagInitializer>,
    /// Pure allow/deny evaluator for page navigation.
    pub guard: Arc<RouteGuard>,
}

impl AppContext {
    /// Wire the flag store, initializer, and guard from one config.
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let flags = Arc::new(FlagStore::new(config::defaults::default_flag_set()));

        let source: Option<Arc<dyn FlagSource>> = config
            .flags_url
            .as_ref()
            .map(|url| Arc::new(HttpFlagSource::new(url.clone())) as Arc<dyn FlagSource>);

        let flag_init = Arc::new(FlagInitializer::new(
            flags.clone(),
            source,
            Duration::from_millis(config.flags_init_delay_ms),
        ));

        let guard = Arc::new(RouteGuard::new("/features", &config.features_password));

        Self {
            config,
            flags,
            flag_init,
            guard,
        }
    }
}
