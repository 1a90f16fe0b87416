//! JSON-RPC client handle bound to a single endpoint.
//!
//! # Responsibilities
//! - Hold the endpoint URL and the underlying HTTP client
//! - Send JSON-RPC 2.0 requests and surface transport/RPC failures as
//!   typed errors
//!
//! Construction is infallible and makes no connection; the first request
//! establishes one lazily.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while talking to an endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, TLS, non-2xx status).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The response body did not decode into the expected shape.
    #[error("malformed RPC response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A client handle for one endpoint URL.
pub struct JsonRpcClient {
    http: Client,
    url: String,
}

impl JsonRpcClient {
    /// Create a client bound to `url`. No connection is made here.
    pub fn new(url: &str) -> Self {
        tracing::debug!(url = %url, "JSON-RPC client created");
        Self {
            http: Client::new(),
            url: url.to_string(),
        }
    }

    /// The endpoint URL this client is bound to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a JSON-RPC request and decode the `result` field.
    pub async fn request<P, R>(&self, method: &str, params: P) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let envelope: serde_json::Value = response.json().await?;
        if let Some(err) = envelope.get("error") {
            return Err(ClientError::Rpc {
                code: err.get("code").and_then(|c| c.as_i64()).unwrap_or(0),
                message: err
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown")
                    .to_string(),
            });
        }

        let result = envelope
            .get("result")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(result)?)
    }
}

impl std::fmt::Debug for JsonRpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcClient")
            .field("url", &self.url)
            .finish()
    }
}
