//! Compiled-in application defaults.
//!
//! This is the static document a fresh install runs on: tenant identity,
//! the seed feature-flag set, and the UI theme tokens. Three flag sets
//! live here with deliberately different `enabled` values:
//!
//! - [`default_flag_set`] seeds the in-memory store (auth on, cart off).
//! - [`published_flags`] is the success-path document of the flags
//!   endpoint (auth off, cart off).
//! - [`fallback_flags`] is served alongside a 500 (auth on, cart off,
//!   version tagged `-fallback`).
//!
//! The auth default differing between the three is the shipped behavior;
//! see DESIGN.md before aligning them.

use serde::{Deserialize, Serialize};

use crate::flags::model::{FeatureDescriptor, FeatureFlagSet, FlagsDocument};

pub const FLAGS_VERSION: &str = "1.0.0";
pub const FLAGS_VERSION_FALLBACK: &str = "1.0.0-fallback";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Color names consumed by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub primary: String,
    pub neutral: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppDefaults {
    pub tenant: TenantInfo,
    pub features: FeatureFlagSet,
    pub theme: ThemeTokens,
}

pub fn app_defaults() -> AppDefaults {
    AppDefaults {
        tenant: TenantInfo {
            id: "tenant-uuid".to_string(),
            name: "Portal Starter Template".to_string(),
            description: "A production-ready starter for feature-flagged portals. \
                          Build accessible, performant applications in minutes, not hours."
                .to_string(),
        },
        features: default_flag_set(),
        theme: ThemeTokens {
            primary: "green".to_string(),
            neutral: "slate".to_string(),
        },
    }
}

fn descriptor(
    name: &str,
    features: &[&str],
    routes: &[&str],
    description: &str,
    enabled: bool,
) -> FeatureDescriptor {
    FeatureDescriptor {
        name: name.to_string(),
        features: features.iter().map(|s| s.to_string()).collect(),
        routes: routes.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        enabled,
    }
}

fn flag_set(auth_enabled: bool, cart_enabled: bool) -> FeatureFlagSet {
    let mut set = FeatureFlagSet::new();
    set.insert(
        "auth".to_string(),
        descriptor(
            "authentication",
            &["authentication", "user-management"],
            &["/auth/login", "/auth/register"],
            "User authentication system",
            auth_enabled,
        ),
    );
    set.insert(
        "cart".to_string(),
        descriptor(
            "shopping-cart",
            &["shopping-cart", "checkout"],
            &["/cart", "/cart/checkout"],
            "Shopping cart and checkout flow",
            cart_enabled,
        ),
    );
    set
}

/// Seed for the flag store before any server fetch.
pub fn default_flag_set() -> FeatureFlagSet {
    flag_set(true, false)
}

/// Success-path document for `/api/feature-flags` when no published
/// override file exists.
pub fn published_flags() -> FlagsDocument {
    FlagsDocument::new(flag_set(false, false), FLAGS_VERSION, Some(true))
}

/// Conservative document served with the 500 branch. Carries no
/// `initialized` marker.
pub fn fallback_flags() -> FlagsDocument {
    FlagsDocument::new(flag_set(true, false), FLAGS_VERSION_FALLBACK, None)
}
