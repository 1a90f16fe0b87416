//! Static catalogue of known environments.
//!
//! # Responsibilities
//! - Hold display metadata for each environment
//! - Hold the endpoint pair for each environment, layering configured
//!   overrides over built-in defaults
//! - Stay read-only after construction

use std::collections::HashMap;

use crate::config::schema::EndpointOverrides;
use crate::env::types::{ApiEnv, EndpointPair, EnvInfo};

/// Built-in gateway endpoint, used for any environment field with no override.
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:5001/";

/// Built-in full-node endpoint, used for any environment field with no override.
pub const DEFAULT_FULLNODE_URL: &str = "http://127.0.0.1:9000/";

/// Read-only mapping from environment to endpoints and display metadata.
///
/// Built once at startup from [`EndpointOverrides`]. Non-local environments
/// fall back to the same loopback defaults as `local` when unconfigured; that
/// keeps an unconfigured build pointing somewhere harmless, at the cost of
/// pointing somewhere wrong.
#[derive(Debug, Clone)]
pub struct Registry {
    endpoints: HashMap<ApiEnv, EndpointPair>,
}

impl Registry {
    /// Build the registry, applying per-environment, per-field overrides.
    ///
    /// An override is only used when it is present and non-empty; each field
    /// falls back to its built-in default independently.
    pub fn new(overrides: &EndpointOverrides) -> Self {
        let mut endpoints = HashMap::with_capacity(ApiEnv::ALL.len());
        for env in ApiEnv::ALL {
            let ov = overrides.for_env(env);
            endpoints.insert(
                env,
                EndpointPair {
                    gateway: pick(ov.gateway.as_deref(), DEFAULT_GATEWAY_URL),
                    full_node: pick(ov.full_node.as_deref(), DEFAULT_FULLNODE_URL),
                },
            );
        }
        Self { endpoints }
    }

    /// Display metadata for an environment. Total over the closed set.
    pub fn info_of(env: ApiEnv) -> EnvInfo {
        match env {
            ApiEnv::Local => EnvInfo {
                name: "Local",
                color: "#9064ff",
            },
            ApiEnv::DevNet => EnvInfo {
                name: "DevNet",
                color: "#29b6af",
            },
            ApiEnv::Staging => EnvInfo {
                name: "Staging",
                color: "#ff4a8d",
            },
        }
    }

    /// The registered endpoint pair for an environment.
    ///
    /// `None` means a variant was never inserted, which the constructor rules
    /// out; the resolver promotes it to [`crate::env::types::EnvError::MissingEndpoints`].
    pub fn endpoints_of(&self, env: ApiEnv) -> Option<&EndpointPair> {
        self.endpoints.get(&env)
    }
}

fn pick(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::EndpointOverride;

    #[test]
    fn test_defaults_for_every_environment() {
        let registry = Registry::new(&EndpointOverrides::default());
        for env in ApiEnv::ALL {
            let pair = registry.endpoints_of(env).unwrap();
            assert_eq!(pair.gateway, DEFAULT_GATEWAY_URL);
            assert_eq!(pair.full_node, DEFAULT_FULLNODE_URL);
        }
    }

    #[test]
    fn test_override_is_scoped_to_one_field() {
        let mut overrides = EndpointOverrides::default();
        overrides.staging = EndpointOverride {
            gateway: Some("https://gateway.staging.example.com/".to_string()),
            full_node: None,
        };
        let registry = Registry::new(&overrides);

        let staging = registry.endpoints_of(ApiEnv::Staging).unwrap();
        assert_eq!(staging.gateway, "https://gateway.staging.example.com/");
        assert_eq!(staging.full_node, DEFAULT_FULLNODE_URL);

        // Unrelated environments keep both defaults.
        for env in [ApiEnv::Local, ApiEnv::DevNet] {
            let pair = registry.endpoints_of(env).unwrap();
            assert_eq!(pair.gateway, DEFAULT_GATEWAY_URL);
            assert_eq!(pair.full_node, DEFAULT_FULLNODE_URL);
        }
    }

    #[test]
    fn test_empty_override_falls_back_to_default() {
        let mut overrides = EndpointOverrides::default();
        overrides.dev_net.gateway = Some(String::new());
        let registry = Registry::new(&overrides);

        let pair = registry.endpoints_of(ApiEnv::DevNet).unwrap();
        assert_eq!(pair.gateway, DEFAULT_GATEWAY_URL);
    }

    #[test]
    fn test_info_is_total_and_deterministic() {
        for env in ApiEnv::ALL {
            assert_eq!(Registry::info_of(env), Registry::info_of(env));
        }
        assert_eq!(Registry::info_of(ApiEnv::Local).name, "Local");
        assert_eq!(Registry::info_of(ApiEnv::DevNet).color, "#29b6af");
        assert_eq!(Registry::info_of(ApiEnv::Staging).name, "Staging");
    }
}
