//! Network environment resolution and provider lifecycle management.
//!
//! # Architecture Overview
//!
//! ```text
//!   config file / process env          ┌──────────────────────────────┐
//!   ───────────────────────────────▶  │           config             │
//!                                     │  schema / loader / validation │
//!                                     └──────────────┬───────────────┘
//!                                                    │ ApiConfig
//!                                                    ▼
//!                                     ┌──────────────────────────────┐
//!                                     │            env               │
//!                                     │   resolver → registry        │
//!                                     └──────────────┬───────────────┘
//!                                                    │ ApiEnv + EndpointPair
//!                                                    ▼
//!                                     ┌──────────────────────────────┐
//!   currentClients / switch /         │          provider            │
//!   signerFor  ◀───────────────────▶  │  manager → client, signer    │
//!                                     └──────────────────────────────┘
//! ```
//!
//! The crate owns exactly one live environment at a time. An environment
//! switch replaces both client handles; the lazily-created signing handle is
//! memoized once per process and deliberately survives the switch.

pub mod config;
pub mod env;
pub mod provider;

pub use config::schema::ApiConfig;
pub use env::registry::Registry;
pub use env::types::{ApiEnv, EndpointPair, EnvError, EnvInfo, EnvResult};
pub use provider::client::JsonRpcClient;
pub use provider::manager::{ApiProvider, ClientPair};
pub use provider::signer::SigningHandle;
