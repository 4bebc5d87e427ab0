use crate::flags::model::now_iso;
use crate::AppContext;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

pub async fn ping(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    debug!("ping");
    Json(json!({
        "message": "pong",
        "timestamp": now_iso(),
        "environment": ctx.config.env,
    }))
}
