//! Environment-specific types and error definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Re-export EndpointOverrides from config module to avoid duplication
pub use crate::config::schema::EndpointOverrides;

/// The closed set of deployment environments a client can talk to.
///
/// The wire/config names (`local`, `devNet`, `staging`) are case-sensitive;
/// anything else is rejected at the configuration boundary and never enters
/// the system as a raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiEnv {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "devNet")]
    DevNet,
    #[serde(rename = "staging")]
    Staging,
}

impl ApiEnv {
    /// Every known environment, in display order.
    pub const ALL: [ApiEnv; 3] = [ApiEnv::Local, ApiEnv::DevNet, ApiEnv::Staging];

    /// The canonical configuration name for this environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiEnv::Local => "local",
            ApiEnv::DevNet => "devNet",
            ApiEnv::Staging => "staging",
        }
    }
}

impl fmt::Display for ApiEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiEnv {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(ApiEnv::Local),
            "devNet" => Ok(ApiEnv::DevNet),
            "staging" => Ok(ApiEnv::Staging),
            other => Err(EnvError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Presentation metadata for an environment (picker UIs).
///
/// Pure display data; nothing in the provider behaves differently based on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvInfo {
    /// Human-readable environment name.
    pub name: &'static str,
    /// Accent color (hex) used by environment pickers.
    pub color: &'static str,
}

/// The two network addresses a client uses for one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointPair {
    /// Gateway endpoint URL.
    pub gateway: String,
    /// Full-node endpoint URL.
    pub full_node: String,
}

/// Errors that can occur during environment resolution.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The configured selector names an environment outside the closed set.
    /// Fatal at startup; an explicit (invalid) choice is never substituted.
    #[error("unknown environment \"{0}\" (expected local, devNet or staging)")]
    UnknownEnvironment(String),

    /// A known environment had no registered endpoint pair. The registry
    /// constructor inserts every variant, so observing this is a bug in this
    /// crate, not a configuration problem.
    #[error("no endpoints registered for environment {0}")]
    MissingEndpoints(ApiEnv),
}

/// Result type for environment resolution.
pub type EnvResult<T> = Result<T, EnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("local".parse::<ApiEnv>().unwrap(), ApiEnv::Local);
        assert_eq!("devNet".parse::<ApiEnv>().unwrap(), ApiEnv::DevNet);
        assert_eq!("staging".parse::<ApiEnv>().unwrap(), ApiEnv::Staging);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Local".parse::<ApiEnv>().is_err());
        assert!("DEVNET".parse::<ApiEnv>().is_err());
    }

    #[test]
    fn test_unknown_environment_carries_raw_value() {
        let err = "bogus".parse::<ApiEnv>().unwrap_err();
        match err {
            EnvError::UnknownEnvironment(raw) => assert_eq!(raw, "bogus"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for env in ApiEnv::ALL {
            assert_eq!(env.to_string().parse::<ApiEnv>().unwrap(), env);
        }
    }

    #[test]
    fn test_error_display() {
        let err = EnvError::UnknownEnvironment("bogus".to_string());
        assert!(err.to_string().contains("\"bogus\""));

        let err = EnvError::MissingEndpoints(ApiEnv::Staging);
        assert!(err.to_string().contains("staging"));
    }
}
