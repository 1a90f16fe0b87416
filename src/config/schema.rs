//! Configuration schema definitions.
//!
//! This module defines the configuration surface for the provider: one raw
//! environment selector plus up to six endpoint overrides, one
//! (gateway, full node) pair per known environment. All types derive Serde
//! traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::env::types::ApiEnv;

/// Environment variable naming the startup environment.
pub const ENV_SELECTOR_VAR: &str = "API_ENV";

/// Root configuration for the provider.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Raw environment selector. Validated by the resolver; absence (or an
    /// empty value) yields the built-in default environment.
    #[serde(deserialize_with = "empty_as_absent")]
    pub env: Option<String>,

    /// Per-environment endpoint overrides.
    pub endpoints: EndpointOverrides,
}

/// Endpoint overrides for every known environment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointOverrides {
    pub local: EndpointOverride,
    pub dev_net: EndpointOverride,
    pub staging: EndpointOverride,
}

/// Optional endpoint override for a single environment.
///
/// Each field is applied independently; an absent or empty field falls back
/// to the built-in default for that endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointOverride {
    /// Gateway endpoint URL.
    pub gateway: Option<String>,

    /// Full-node endpoint URL.
    pub full_node: Option<String>,
}

impl EndpointOverrides {
    /// The override slot for one environment.
    pub fn for_env(&self, env: ApiEnv) -> &EndpointOverride {
        match env {
            ApiEnv::Local => &self.local,
            ApiEnv::DevNet => &self.dev_net,
            ApiEnv::Staging => &self.staging,
        }
    }
}

impl ApiConfig {
    /// Read the configuration from process environment variables.
    ///
    /// Variable names follow the `API_ENDPOINT_<ENV>[_FULLNODE]` convention;
    /// empty values are treated as absent.
    pub fn from_env() -> Self {
        Self {
            env: non_empty_var(ENV_SELECTOR_VAR),
            endpoints: EndpointOverrides {
                local: EndpointOverride {
                    gateway: non_empty_var("API_ENDPOINT_LOCAL"),
                    full_node: non_empty_var("API_ENDPOINT_LOCAL_FULLNODE"),
                },
                dev_net: EndpointOverride {
                    gateway: non_empty_var("API_ENDPOINT_DEV_NET"),
                    full_node: non_empty_var("API_ENDPOINT_DEV_NET_FULLNODE"),
                },
                staging: EndpointOverride {
                    gateway: non_empty_var("API_ENDPOINT_STAGING"),
                    full_node: non_empty_var("API_ENDPOINT_STAGING_FULLNODE"),
                },
            },
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

/// An empty selector means "not configured", the same as a missing one, on
/// every ingestion path.
fn empty_as_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_overrides() {
        let config = ApiConfig::default();
        assert!(config.env.is_none());
        for env in ApiEnv::ALL {
            let ov = config.endpoints.for_env(env);
            assert!(ov.gateway.is_none());
            assert!(ov.full_node.is_none());
        }
    }

    #[test]
    fn test_for_env_maps_each_variant_to_its_slot() {
        let mut overrides = EndpointOverrides::default();
        overrides.local.gateway = Some("l".to_string());
        overrides.dev_net.gateway = Some("d".to_string());
        overrides.staging.gateway = Some("s".to_string());

        assert_eq!(overrides.for_env(ApiEnv::Local).gateway.as_deref(), Some("l"));
        assert_eq!(overrides.for_env(ApiEnv::DevNet).gateway.as_deref(), Some("d"));
        assert_eq!(overrides.for_env(ApiEnv::Staging).gateway.as_deref(), Some("s"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml_src = r#"
            env = "staging"

            [endpoints.staging]
            gateway = "https://gateway.staging.example.com/"
            full_node = "https://fullnode.staging.example.com/"
        "#;
        let config: ApiConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.env.as_deref(), Some("staging"));
        assert_eq!(
            config.endpoints.staging.gateway.as_deref(),
            Some("https://gateway.staging.example.com/")
        );
        assert!(config.endpoints.local.gateway.is_none());
    }

    #[test]
    fn test_toml_empty_selector_is_absent() {
        let config: ApiConfig = toml::from_str(r#"env = """#).unwrap();
        assert!(config.env.is_none());
    }

    #[test]
    fn test_from_env_treats_empty_values_as_absent() {
        std::env::set_var(ENV_SELECTOR_VAR, "");
        std::env::set_var("API_ENDPOINT_LOCAL", "http://10.0.0.1:5001/");

        let config = ApiConfig::from_env();
        assert!(config.env.is_none());
        assert_eq!(
            config.endpoints.local.gateway.as_deref(),
            Some("http://10.0.0.1:5001/")
        );

        std::env::remove_var(ENV_SELECTOR_VAR);
        std::env::remove_var("API_ENDPOINT_LOCAL");
    }
}
