// rest/routes/flags.rs — published feature flags.
//
// Serves the flag document clients initialize from. The document comes
// from `{data_dir}/feature-flags.json` when an operator published one,
// else from the compiled-in defaults. A present-but-unreadable file is an
// internal failure: 500 plus the conservative fallback document, so
// clients always receive a complete flag set.

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::path::Path;
use std::sync::Arc;
use tracing::error;

use crate::config::defaults;
use crate::flags::model::{FeatureFlagSet, FlagsDocument, FlagsEnvelope};
use crate::AppContext;

const CACHE_DIRECTIVE: &str = "public, max-age=300";

pub async fn get_feature_flags(State(ctx): State<Arc<AppContext>>) -> Response {
    match load_published(&ctx.config.data_dir) {
        Ok(document) => (
            StatusCode::OK,
            [(header::CACHE_CONTROL, CACHE_DIRECTIVE)],
            Json(FlagsEnvelope::success(document)),
        )
            .into_response(),
        Err(e) => {
            error!("failed to load published feature flags: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FlagsEnvelope::failure(
                    e.to_string(),
                    defaults::fallback_flags(),
                )),
            )
                .into_response()
        }
    }
}

/// Published document: the optional override file wins over the
/// compiled-in defaults. The file holds a bare flag set keyed by feature.
fn load_published(data_dir: &Path) -> Result<FlagsDocument> {
    let path = data_dir.join("feature-flags.json");
    if !path.exists() {
        return Ok(defaults::published_flags());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let features: FeatureFlagSet =
        serde_json::from_str(&contents).context("parsing feature-flags.json")?;
    anyhow::ensure!(!features.is_empty(), "feature-flags.json holds no features");

    Ok(FlagsDocument::new(
        features,
        defaults::FLAGS_VERSION,
        Some(true),
    ))
}
