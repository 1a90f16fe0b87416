//! Signing handle bound to one network client.
//!
//! # Security
//! - Private keys are loaded from an environment variable or passed in as
//!   parsed key material
//! - Keys are never logged or serialized

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::{Signature, Signer};
use std::sync::Arc;
use thiserror::Error;

use crate::provider::client::{ClientError, JsonRpcClient};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "API_PROVIDER_PRIVATE_KEY";

/// Errors that can occur while creating or using a signing handle.
#[derive(Debug, Error)]
pub enum SignerError {
    /// Invalid private key format or derivation error.
    #[error("key error: {0}")]
    Key(String),

    /// The underlying signer refused the payload.
    #[error("signing failed: {0}")]
    Sign(String),

    /// Submission through the bound client failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// A signing capability bound at construction time to one client handle.
///
/// The binding is permanent: the handle keeps the client it was built
/// against for its whole life, even if the provider manager later swaps its
/// own clients for a different environment.
pub struct SigningHandle {
    keypair: PrivateKeySigner,
    client: Arc<JsonRpcClient>,
}

impl SigningHandle {
    pub fn new(keypair: PrivateKeySigner, client: Arc<JsonRpcClient>) -> Self {
        tracing::info!(
            address = %keypair.address(),
            url = %client.url(),
            "Signing handle created"
        );
        Self { keypair, client }
    }

    /// The signing address derived from the key material.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// The client this handle was bound against.
    pub fn client(&self) -> &Arc<JsonRpcClient> {
        &self.client
    }

    /// Sign arbitrary message bytes.
    pub async fn sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        self.keypair
            .sign_message(message)
            .await
            .map_err(|e| SignerError::Sign(e.to_string()))
    }

    /// Sign a payload and submit it through the bound client.
    ///
    /// The request goes to the client captured at construction time,
    /// regardless of what the provider manager currently points at.
    pub async fn submit(
        &self,
        method: &str,
        payload: &[u8],
    ) -> Result<serde_json::Value, SignerError> {
        let signature = self.sign_message(payload).await?;
        let params = serde_json::json!([
            format!("0x{}", alloy::hex::encode(payload)),
            format!("0x{}", alloy::hex::encode(signature.as_bytes())),
        ]);
        Ok(self.client.request(method, params).await?)
    }
}

impl std::fmt::Debug for SigningHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of debug output.
        f.debug_struct("SigningHandle")
            .field("address", &self.keypair.address())
            .field("url", &self.client.url())
            .finish()
    }
}

/// Parse key material from a hex-encoded private key string.
pub fn keypair_from_hex(private_key_hex: &str) -> Result<PrivateKeySigner, SignerError> {
    // Strip 0x prefix if present
    let key_hex = private_key_hex
        .strip_prefix("0x")
        .unwrap_or(private_key_hex);

    key_hex
        .parse()
        .map_err(|e| SignerError::Key(format!("invalid private key format: {}", e)))
}

/// Load key material from the `API_PROVIDER_PRIVATE_KEY` environment variable.
pub fn keypair_from_env() -> Result<PrivateKeySigner, SignerError> {
    let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
        SignerError::Key(format!(
            "environment variable {} not set",
            PRIVATE_KEY_ENV_VAR
        ))
    })?;

    keypair_from_hex(&private_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn test_client() -> Arc<JsonRpcClient> {
        Arc::new(JsonRpcClient::new("http://127.0.0.1:5001/"))
    }

    #[test]
    fn test_keypair_from_hex() {
        let keypair = keypair_from_hex(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(
            keypair.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_keypair_with_0x_prefix() {
        let keypair = keypair_from_hex(&format!("0x{}", TEST_PRIVATE_KEY)).unwrap();
        assert_eq!(
            keypair.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_invalid_private_key() {
        let result = keypair_from_hex("invalid_key");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid private key"));
    }

    #[test]
    fn test_handle_stays_bound_to_its_client() {
        let client = test_client();
        let handle = SigningHandle::new(keypair_from_hex(TEST_PRIVATE_KEY).unwrap(), client.clone());
        assert!(Arc::ptr_eq(handle.client(), &client));
    }

    #[test]
    fn test_debug_hides_key_material() {
        let handle = SigningHandle::new(keypair_from_hex(TEST_PRIVATE_KEY).unwrap(), test_client());
        let rendered = format!("{handle:?}");
        assert!(!rendered.contains(TEST_PRIVATE_KEY));
        assert!(rendered.contains("http://127.0.0.1:5001/"));
    }

    #[tokio::test]
    async fn test_sign_message() {
        let handle = SigningHandle::new(keypair_from_hex(TEST_PRIVATE_KEY).unwrap(), test_client());
        let signature = handle.sign_message(b"Hello, World!").await.unwrap();
        // Signature should be 65 bytes (r, s, v)
        assert_eq!(signature.as_bytes().len(), 65);
    }
}
