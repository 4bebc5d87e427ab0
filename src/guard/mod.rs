// SPDX-License-Identifier: MIT
//! Route gating driven by feature flags.
//!
//! [`RouteGuard::evaluate`] is a pure decision function: given the current
//! flag set, a destination path, and the caller's credential (if any), it
//! returns allow or deny-with-reason. Rendering the outcome (redirects,
//! notices) lives in [`middleware`], which keeps the decision itself
//! testable without any HTTP machinery.

pub mod middleware;

use crate::flags::model::FeatureFlagSet;

/// Outcome of evaluating one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// Destination is under the protected prefix and the credential is
    /// absent or wrong.
    MissingCredential,
    /// Destination is owned by a feature whose `enabled` bit is false.
    FeatureDisabled { feature: String },
}

/// Stateless navigation gate. Consults the flag set passed to each call,
/// never caches between navigations.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    /// Path prefix gated by the credential check (shipped: `/features`).
    protected_prefix: String,
    /// Expected credential value. A plain string compare against a cookie,
    /// shipped as the placeholder "123456" — a demo gate, not auth.
    expected_key: String,
}

impl RouteGuard {
    pub fn new(protected_prefix: &str, expected_key: &str) -> Self {
        Self {
            protected_prefix: protected_prefix.to_string(),
            expected_key: expected_key.to_string(),
        }
    }

    /// Decide whether `path` may be navigated to.
    ///
    /// Checks run in a fixed order: the credential gate first, then each
    /// feature's owned route prefixes. The flag set iterates in key order,
    /// so when a path is owned by several disabled features the first key
    /// wins; any match blocks, so the outcome is the same either way.
    pub fn evaluate(
        &self,
        flags: &FeatureFlagSet,
        path: &str,
        credential: Option<&str>,
    ) -> RouteDecision {
        if path.starts_with(&self.protected_prefix)
            && credential != Some(self.expected_key.as_str())
        {
            return RouteDecision::Deny(DenyReason::MissingCredential);
        }

        for (key, descriptor) in flags {
            if descriptor.enabled {
                continue;
            }
            if descriptor
                .routes
                .iter()
                .any(|prefix| path.starts_with(prefix.as_str()))
            {
                return RouteDecision::Deny(DenyReason::FeatureDisabled {
                    feature: key.clone(),
                });
            }
        }

        RouteDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::model::FeatureDescriptor;

    fn guard() -> RouteGuard {
        RouteGuard::new("/features", "123456")
    }

    fn flags(auth_enabled: bool, cart_enabled: bool) -> FeatureFlagSet {
        let mut set = FeatureFlagSet::new();
        set.insert(
            "auth".to_string(),
            FeatureDescriptor {
                name: "authentication".to_string(),
                features: vec!["authentication".to_string()],
                routes: vec!["/auth/login".to_string(), "/auth/register".to_string()],
                description: String::new(),
                enabled: auth_enabled,
            },
        );
        set.insert(
            "cart".to_string(),
            FeatureDescriptor {
                name: "shopping-cart".to_string(),
                features: vec!["shopping-cart".to_string()],
                routes: vec!["/cart".to_string(), "/cart/checkout".to_string()],
                description: String::new(),
                enabled: cart_enabled,
            },
        );
        set
    }

    #[test]
    fn allows_unowned_paths() {
        let decision = guard().evaluate(&flags(false, false), "/", None);
        assert_eq!(decision, RouteDecision::Allow);
    }

    #[test]
    fn disabled_auth_blocks_login() {
        let decision = guard().evaluate(&flags(false, true), "/auth/login", None);
        assert_eq!(
            decision,
            RouteDecision::Deny(DenyReason::FeatureDisabled {
                feature: "auth".to_string()
            })
        );
    }

    #[test]
    fn enabled_auth_allows_login() {
        let decision = guard().evaluate(&flags(true, true), "/auth/login", None);
        assert_eq!(decision, RouteDecision::Allow);
    }

    #[test]
    fn disabled_cart_blocks_cart_and_checkout() {
        let set = flags(true, false);
        for path in ["/cart", "/cart/checkout"] {
            assert_eq!(
                guard().evaluate(&set, path, None),
                RouteDecision::Deny(DenyReason::FeatureDisabled {
                    feature: "cart".to_string()
                }),
                "path {path} should be blocked"
            );
        }
    }

    #[test]
    fn protected_prefix_requires_exact_credential() {
        let set = flags(true, true);
        let g = guard();

        assert_eq!(
            g.evaluate(&set, "/features", None),
            RouteDecision::Deny(DenyReason::MissingCredential)
        );
        assert_eq!(
            g.evaluate(&set, "/features", Some("wrong")),
            RouteDecision::Deny(DenyReason::MissingCredential)
        );
        // Prefix match covers sub-paths too.
        assert_eq!(
            g.evaluate(&set, "/features/detail", Some("12345")),
            RouteDecision::Deny(DenyReason::MissingCredential)
        );
        assert_eq!(
            g.evaluate(&set, "/features", Some("123456")),
            RouteDecision::Allow
        );
    }

    #[test]
    fn credential_gate_runs_before_feature_checks() {
        // Even if a disabled feature claimed the protected prefix, the
        // credential denial is reported first.
        let mut set = flags(true, true);
        set.insert(
            "lab".to_string(),
            FeatureDescriptor {
                name: "lab".to_string(),
                features: vec![],
                routes: vec!["/features".to_string()],
                description: String::new(),
                enabled: false,
            },
        );

        assert_eq!(
            guard().evaluate(&set, "/features", None),
            RouteDecision::Deny(DenyReason::MissingCredential)
        );
    }

    #[test]
    fn overlapping_disabled_features_report_first_key() {
        let mut set = flags(true, true);
        for key in ["promo", "basket"] {
            set.insert(
                key.to_string(),
                FeatureDescriptor {
                    name: key.to_string(),
                    features: vec![],
                    routes: vec!["/cart".to_string()],
                    description: String::new(),
                    enabled: false,
                },
            );
        }

        // BTreeMap order: "basket" sorts before "promo".
        assert_eq!(
            guard().evaluate(&set, "/cart", None),
            RouteDecision::Deny(DenyReason::FeatureDisabled {
                feature: "basket".to_string()
            })
        );
    }

    #[test]
    fn credential_is_ignored_outside_protected_prefix() {
        let decision = guard().evaluate(&flags(true, true), "/cart", Some("123456"));
        assert_eq!(decision, RouteDecision::Allow);
    }
}
