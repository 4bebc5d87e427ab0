// guard/middleware.rs — navigation gating for the page routes.
//
// Runs on every page request: triggers flag initialization, snapshots the
// store, and renders the guard's decision. Deny outcomes become redirects:
//   MissingCredential   -> 303 /
//   FeatureDisabled{f}  -> 303 /?notice=feature-disabled&feature=f
// The root page turns the query parameters into a visible notice.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::info;

use super::{DenyReason, RouteDecision};
use crate::AppContext;

pub async fn guard_pages(
    State(ctx): State<Arc<AppContext>>,
    req: Request,
    next: Next,
) -> Response {
    // Fetch-once initialization rides on navigation; cheap after the
    // first success.
    ctx.flag_init.ensure_initialized().await;

    let path = req.uri().path().to_string();
    let credential = cookie_value(req.headers(), "password");
    let flags = ctx.flags.read().await;

    match ctx.guard.evaluate(&flags, &path, credential.as_deref()) {
        RouteDecision::Allow => next.run(req).await,
        RouteDecision::Deny(DenyReason::MissingCredential) => {
            info!(path = %path, "credential gate denied navigation");
            Redirect::to("/").into_response()
        }
        RouteDecision::Deny(DenyReason::FeatureDisabled { feature }) => {
            info!(path = %path, feature = %feature, "feature disabled — navigation blocked");
            // Flag keys are plain tokens; safe in a query string unescaped.
            Redirect::to(&format!("/?notice=feature-disabled&feature={feature}")).into_response()
        }
    }
}

/// Pull one value out of the `Cookie` header. Plain string scan; one
/// value does not warrant a cookie crate.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    for pair in raw.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=') {
            if key == name {
                return Some(value.to_string());
            }
        }
    }
    None
}
