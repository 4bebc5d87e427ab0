// rest/mod.rs — HTTP server and route table.
//
// One axum server carries both the JSON API and the gated portal pages.
//
// Endpoints:
//   GET  /api/feature-flags   (CORS, shared-cacheable)
//   GET  /api/jobs
//   POST /api/jobs/apply
//   GET  /api/ping
//   GET  /                    (renders notices)
//   GET  /auth/login, /auth/register, /cart, /cart/checkout, /features
//
// Page routes run through the navigation guard middleware; API routes do
// not.

pub mod routes;

use anyhow::Result;
use axum::{
    http::Method,
    middleware,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::guard::middleware::guard_pages;
use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("portal listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    let flags_api = Router::new()
        .route("/api/feature-flags", get(routes::flags::get_feature_flags))
        .layer(cors);

    let api = Router::new()
        .route("/api/jobs", get(routes::jobs::list_jobs))
        .route("/api/jobs/apply", post(routes::jobs::apply))
        .route("/api/ping", get(routes::ping::ping));

    let pages = Router::new()
        .route("/", get(routes::pages::home))
        .route("/auth/login", get(routes::pages::auth_login))
        .route("/auth/register", get(routes::pages::auth_register))
        .route("/cart", get(routes::pages::cart))
        .route("/cart/checkout", get(routes::pages::checkout))
        .route("/features", get(routes::pages::features))
        .layer(middleware::from_fn_with_state(ctx.clone(), guard_pages));

    flags_api.merge(api).merge(pages).with_state(ctx)
}
