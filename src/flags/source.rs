//! Upstream flag fetch.
//!
//! The fetcher calls GET `{base_url}/api/feature-flags` on a configured
//! upstream service and parses the standard envelope. Any transport or
//! parse failure, and any response without a usable feature set, comes
//! back as `None` — callers keep their current state.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

use super::model::{FeatureFlagSet, FlagsEnvelope};

/// Source of authoritative feature flags.
///
/// Implemented by [`HttpFlagSource`] for the real upstream; tests swap in
/// counting stubs.
#[async_trait]
pub trait FlagSource: Send + Sync {
    /// Fetch the authoritative flag set, or `None` when no usable data
    /// is available. Never errors out to the caller.
    async fn fetch(&self) -> Option<FeatureFlagSet>;
}

/// HTTP-backed flag source.
///
/// No retry and no explicit timeout: a single request per call, relying
/// on transport defaults. The initializer re-calls on the next navigation
/// if this returns `None`.
pub struct HttpFlagSource {
    base_url: String,
}

impl HttpFlagSource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn call(&self) -> Result<FeatureFlagSet> {
        let url = format!("{}/api/feature-flags", self.base_url);
        let client = reqwest::Client::builder().build()?;

        let resp = client.get(&url).send().await?.error_for_status()?;
        let body: FlagsEnvelope = resp.json().await?;

        anyhow::ensure!(body.success, "upstream reported success=false");
        anyhow::ensure!(
            !body.data.features.is_empty(),
            "upstream returned an empty feature set"
        );
        Ok(body.data.features)
    }
}

#[async_trait]
impl FlagSource for HttpFlagSource {
    async fn fetch(&self) -> Option<FeatureFlagSet> {
        match self.call().await {
            Ok(features) => {
                debug!(
                    url = %self.base_url,
                    features = features.len(),
                    "fetched feature flags from upstream"
                );
                Some(features)
            }
            Err(e) => {
                warn!(url = %self.base_url, "flag fetch failed: {e:#} — keeping current flags");
                None
            }
        }
    }
}
