//! Feature-flag data model and wire envelope.
//!
//! A flag set maps a feature key (e.g. "auth", "cart") to a descriptor
//! carrying the routes the feature owns and a single `enabled` switch.
//! The same shapes are served by `/api/feature-flags` and parsed back by
//! the upstream fetcher, so serialization is camelCase throughout.

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One feature entry: identity, owned capabilities and routes, and the
/// `enabled` bit the route guard consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    pub name: String,
    /// Capability names bundled under this feature.
    pub features: Vec<String>,
    /// Path prefixes this feature owns. A navigation under any of these
    /// prefixes is blocked while `enabled` is false.
    pub routes: Vec<String>,
    pub description: String,
    pub enabled: bool,
}

/// Full flag set keyed by feature key.
///
/// BTreeMap keeps iteration order deterministic, so when a path matches
/// several disabled features the same one is reported every time.
pub type FeatureFlagSet = BTreeMap<String, FeatureDescriptor>;

/// The `data` payload of the flags endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagsDocument {
    pub features: FeatureFlagSet,
    /// ISO-8601 timestamp of the last change to the published set.
    pub last_updated: String,
    pub version: String,
    /// Present (and true) on the success branch only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initialized: Option<bool>,
}

impl FlagsDocument {
    pub fn new(features: FeatureFlagSet, version: &str, initialized: Option<bool>) -> Self {
        Self {
            features,
            last_updated: now_iso(),
            version: version.to_string(),
            initialized,
        }
    }
}

/// Response envelope for `/api/feature-flags`.
///
/// The failure branch still carries a full `data` document so clients can
/// fall back to a conservative set without special-casing the error shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagsEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub data: FlagsDocument,
    /// Epoch milliseconds at response time.
    pub timestamp: i64,
}

impl FlagsEnvelope {
    pub fn success(data: FlagsDocument) -> Self {
        Self {
            success: true,
            error: None,
            data,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn failure(error: String, data: FlagsDocument) -> Self {
        Self {
            success: false,
            error: Some(error),
            data,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// Current time as an ISO-8601 string with millisecond precision
/// (e.g. `2026-08-25T12:34:56.789Z`).
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(enabled: bool) -> FeatureDescriptor {
        FeatureDescriptor {
            name: "authentication".to_string(),
            features: vec!["authentication".to_string()],
            routes: vec!["/auth/login".to_string()],
            description: "User authentication system".to_string(),
            enabled,
        }
    }

    #[test]
    fn envelope_success_serializes_without_error_key() {
        let mut set = FeatureFlagSet::new();
        set.insert("auth".to_string(), descriptor(true));
        let envelope = FlagsEnvelope::success(FlagsDocument::new(set, "1.0.0", Some(true)));

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());
        assert_eq!(json["data"]["version"], "1.0.0");
        assert_eq!(json["data"]["initialized"], true);
        assert_eq!(json["data"]["features"]["auth"]["enabled"], true);
        assert!(json["timestamp"].is_i64());
    }

    #[test]
    fn envelope_failure_carries_error_and_fallback_data() {
        let mut set = FeatureFlagSet::new();
        set.insert("auth".to_string(), descriptor(true));
        let envelope = FlagsEnvelope::failure(
            "internal error".to_string(),
            FlagsDocument::new(set, "1.0.0-fallback", None),
        );

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "internal error");
        assert_eq!(json["data"]["version"], "1.0.0-fallback");
        // The fallback document has no initialized marker.
        assert!(json["data"].get("initialized").is_none());
    }

    #[test]
    fn envelope_roundtrips_through_json() {
        let mut set = FeatureFlagSet::new();
        set.insert("cart".to_string(), descriptor(false));
        let envelope = FlagsEnvelope::success(FlagsDocument::new(set.clone(), "1.0.0", Some(true)));

        let text = serde_json::to_string(&envelope).unwrap();
        let parsed: FlagsEnvelope = serde_json::from_str(&text).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data.features, set);
    }

    #[test]
    fn last_updated_is_iso8601() {
        let stamp = now_iso();
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
        assert!(stamp.ends_with('Z'));
    }
}
