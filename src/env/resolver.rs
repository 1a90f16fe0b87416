//! Startup environment resolution.
//!
//! # Responsibilities
//! - Validate the raw environment selector exactly once, at the boundary
//! - Fall back to `devNet` only when no selector was supplied at all
//! - Look up endpoints defensively for the provider manager
//!
//! # Design Decisions
//! - Resolution is a pure function over the selector and the registry
//! - An explicit but invalid selector is fatal; it is never silently
//!   replaced with a different environment

use crate::env::registry::Registry;
use crate::env::types::{ApiEnv, EndpointPair, EnvError, EnvResult};

/// Resolve the effective environment for a fresh process.
///
/// `None` means no selector was configured and yields [`ApiEnv::DevNet`].
/// A supplied value must exactly match a known variant name
/// (case-sensitive) or resolution fails with
/// [`EnvError::UnknownEnvironment`] carrying the offending value.
pub fn resolve_default_env(raw: Option<&str>) -> EnvResult<ApiEnv> {
    match raw {
        None => Ok(ApiEnv::DevNet),
        Some(value) => value.parse(),
    }
}

/// Look up the endpoint pair for a validated environment.
///
/// The registry covers the closed variant set, so the miss branch signals an
/// invariant violation inside this crate rather than a recoverable condition.
pub fn resolve_endpoints(registry: &Registry, env: ApiEnv) -> EnvResult<EndpointPair> {
    registry
        .endpoints_of(env)
        .cloned()
        .ok_or(EnvError::MissingEndpoints(env))
}
