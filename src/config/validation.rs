//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that supplied endpoint overrides parse as URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ApiConfig → Result<(), Vec<ValidationError>>
//! - The environment selector is deliberately NOT checked here; the resolver
//!   owns that check so it happens exactly once

use std::fmt;

use crate::config::schema::ApiConfig;
use crate::env::types::ApiEnv;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &ApiConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for env in ApiEnv::ALL {
        let ov = config.endpoints.for_env(env);
        check_url(env, "gateway", ov.gateway.as_deref(), &mut errors);
        check_url(env, "full_node", ov.full_node.as_deref(), &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(env: ApiEnv, field: &str, value: Option<&str>, errors: &mut Vec<ValidationError>) {
    let Some(raw) = value else { return };
    // Empty overrides fall back to defaults and are not an error.
    if raw.is_empty() {
        return;
    }
    if let Err(e) = url::Url::parse(raw) {
        errors.push(ValidationError {
            field: format!("endpoints.{}.{}", toml_key(env), field),
            message: format!("invalid URL '{raw}': {e}"),
        });
    }
}

/// The config-file key for an environment's override table, which differs
/// from the wire name for `devNet`.
fn toml_key(env: ApiEnv) -> &'static str {
    match env {
        ApiEnv::Local => "local",
        ApiEnv::DevNet => "dev_net",
        ApiEnv::Staging => "staging",
    }
}
