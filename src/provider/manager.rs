//! Provider lifecycle manager.
//!
//! # Responsibilities
//! - Own the live pair of client handles for the active environment
//! - Replace both handles wholesale on an environment switch
//! - Create the process-wide signing handle lazily, exactly once
//!
//! # Design Decisions
//! - One instance per running application, constructed at startup and passed
//!   by reference; never an implicit global
//! - No internal locking: state transitions take `&mut self`, reads take
//!   `&self`, and ordering across tasks is the caller's job
//! - Handles are `Arc`s, so a caller holding a pre-switch reference keeps a
//!   valid (but stale) handle instead of a dangling one

use std::sync::Arc;

use alloy::signers::local::PrivateKeySigner;

use crate::config::schema::ApiConfig;
use crate::env::registry::Registry;
use crate::env::resolver::{resolve_default_env, resolve_endpoints};
use crate::env::types::{ApiEnv, EnvResult};
use crate::provider::client::JsonRpcClient;
use crate::provider::signer::SigningHandle;

/// The live pair of client handles.
#[derive(Debug, Clone)]
pub struct ClientPair {
    pub gateway: Arc<JsonRpcClient>,
    pub full_node: Arc<JsonRpcClient>,
}

/// Owns the active environment and every network/signing handle bound to it.
pub struct ApiProvider {
    registry: Registry,
    env: ApiEnv,
    gateway: Arc<JsonRpcClient>,
    full_node: Arc<JsonRpcClient>,
    signer: Option<Arc<SigningHandle>>,
}

impl ApiProvider {
    /// Resolve the startup environment from `config` and build both clients.
    ///
    /// An explicit but unknown selector is fatal and propagates to the
    /// caller; only a truly absent selector falls back to the default
    /// environment.
    pub fn new(config: &ApiConfig) -> EnvResult<Self> {
        let registry = Registry::new(&config.endpoints);
        let env = resolve_default_env(config.env.as_deref())?;
        let endpoints = resolve_endpoints(&registry, env)?;

        tracing::info!(
            env = %env,
            gateway = %endpoints.gateway,
            full_node = %endpoints.full_node,
            "Provider initialized"
        );

        Ok(Self {
            registry,
            env,
            gateway: Arc::new(JsonRpcClient::new(&endpoints.gateway)),
            full_node: Arc::new(JsonRpcClient::new(&endpoints.full_node)),
            signer: None,
        })
    }

    /// Switch the active environment, replacing both client handles.
    ///
    /// The memoized signer is left untouched: it stays bound to the gateway
    /// client it was created against, not the new one.
    pub fn switch_environment(&mut self, env: ApiEnv) -> EnvResult<()> {
        let endpoints = resolve_endpoints(&self.registry, env)?;

        self.gateway = Arc::new(JsonRpcClient::new(&endpoints.gateway));
        self.full_node = Arc::new(JsonRpcClient::new(&endpoints.full_node));
        self.env = env;

        tracing::info!(
            env = %env,
            gateway = %endpoints.gateway,
            full_node = %endpoints.full_node,
            "Environment switched"
        );

        Ok(())
    }

    /// The live handle pair.
    ///
    /// References returned here stay usable after a later switch, but they
    /// are then no longer the handles the provider uses.
    pub fn current_clients(&self) -> ClientPair {
        ClientPair {
            gateway: Arc::clone(&self.gateway),
            full_node: Arc::clone(&self.full_node),
        }
    }

    /// The active environment.
    pub fn current_env(&self) -> ApiEnv {
        self.env
    }

    /// The endpoint registry, for picker UIs.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The process-wide signing handle.
    ///
    /// The first call binds `keypair` to the current gateway client and
    /// stores the handle; every later call returns the stored handle and
    /// ignores its argument, including after an environment switch.
    pub fn signer_for(&mut self, keypair: PrivateKeySigner) -> Arc<SigningHandle> {
        match &self.signer {
            Some(signer) => {
                tracing::debug!("Signer already initialized, returning memoized handle");
                Arc::clone(signer)
            }
            None => {
                let signer = Arc::new(SigningHandle::new(keypair, Arc::clone(&self.gateway)));
                self.signer = Some(Arc::clone(&signer));
                signer
            }
        }
    }
}

impl std::fmt::Debug for ApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiProvider")
            .field("env", &self.env)
            .field("gateway", &self.gateway.url())
            .field("full_node", &self.full_node.url())
            .field("signer", &self.signer.is_some())
            .finish()
    }
}
