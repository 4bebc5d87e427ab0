//! Job board types and application validation.
//!
//! Wire shapes are camelCase to match the rest of the API surface. The
//! listing data itself is fixture-backed (see [`listings`]); applications
//! are validated, stamped, and echoed back rather than persisted.

pub mod listings;

use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex: email"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Remote,
}

/// One job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    pub posted_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

/// Incoming application payload.
///
/// Required fields deserialize with defaults so that a missing field and
/// an empty string fail validation the same way, with our 400 message
/// instead of a deserializer rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub applicant_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email")]
    InvalidEmail,
}

impl JobApplication {
    /// Required-field check first, then email format, mirroring the order
    /// the messages are reported in.
    pub fn validate(&self) -> Result<(), ApplyError> {
        if self.job_id.is_empty()
            || self.applicant_name.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
        {
            return Err(ApplyError::MissingFields);
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ApplyError::InvalidEmail);
        }
        Ok(())
    }

    /// Stamp the application as accepted for processing: generated id,
    /// submission timestamp, and pending status.
    pub fn into_saved(mut self) -> JobApplication {
        self.id = Some(Uuid::new_v4().to_string());
        self.applied_date = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        self.status = Some(ApplicationStatus::Pending);
        self
    }
}
