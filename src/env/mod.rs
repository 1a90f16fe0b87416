//! Environment subsystem.
//!
//! # Data Flow
//! ```text
//! configuration (selector + endpoint overrides)
//!     → resolver.rs (validate selector at the boundary)
//!     → registry.rs (overrides layered over built-in defaults)
//!     → ApiEnv + EndpointPair (validated, immutable)
//!     → consumed by the provider manager
//! ```
//!
//! # Design Decisions
//! - The environment is a closed variant internally, never a raw string;
//!   the fatal unknown-environment check happens exactly once
//! - The registry is built once and read-only thereafter
//! - Total lookups where the type system allows; a defensive error variant
//!   where it does not

pub mod registry;
pub mod resolver;
pub mod types;

pub use registry::Registry;
pub use types::{ApiEnv, EndpointPair, EnvError, EnvInfo, EnvResult};
