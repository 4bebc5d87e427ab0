// rest/routes/jobs.rs — job listings and applications.

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::info;

use crate::jobs::{listings, Job, JobApplication};

pub async fn list_jobs() -> Json<Vec<Job>> {
    Json(listings::active_jobs())
}

pub async fn apply(
    Json(application): Json<JobApplication>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if let Err(e) = application.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        ));
    }

    let saved = application.into_saved();
    info!(job_id = %saved.job_id, "job application received");

    Ok(Json(json!({
        "success": true,
        "message": "Application submitted successfully",
        "application": saved,
    })))
}
