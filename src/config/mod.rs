//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or process environment
//!     → loader.rs / schema.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ApiConfig (validated, immutable)
//!     → consumed once at provider construction
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload path
//! - All fields have defaults so an empty config is a working config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ApiConfig, EndpointOverride, EndpointOverrides};
