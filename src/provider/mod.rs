//! Provider subsystem.
//!
//! # Data Flow
//! ```text
//! ApiConfig (selector + overrides)
//!     → manager.rs (resolve environment, build client pair)
//!     → client.rs (URL-bound JSON-RPC handles, lazy connection)
//!     → signer.rs (key material bound to the gateway client, once)
//! ```
//!
//! # State Constraints
//! - Exactly one live client pair; a switch replaces both handles wholesale
//! - The signing handle is created at most once per process and is never
//!   rebound, even across environment switches
//! - Private keys never appear in logs or debug output

pub mod client;
pub mod manager;
pub mod signer;

pub use client::{ClientError, JsonRpcClient};
pub use manager::{ApiProvider, ClientPair};
pub use signer::{SignerError, SigningHandle};
