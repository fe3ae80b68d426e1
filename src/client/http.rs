//! reqwest-backed [`PromptClient`].
//!
//! One POST per submission. No auth, no retries, and no timeout unless one
//! is configured.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::provider::{ClientError, PromptClient};
use super::types::{PromptRequest, PromptResponse};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/ai";

pub struct HttpPromptClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpPromptClient {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Builds a client with a request timeout. `None` means wait forever.
    pub fn with_timeout(endpoint: String, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl PromptClient for HttpPromptClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn submit(&self, prompt: &str) -> Result<String, ClientError> {
        let body = PromptRequest {
            prompt: prompt.to_string(),
        };

        info!("POST {} (prompt len={})", self.endpoint, prompt.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    ClientError::Config(e.to_string())
                } else {
                    ClientError::Network(e.to_string())
                }
            })?;

        debug!("Endpoint response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Endpoint error: {} - {}", status, err_body);
            return Err(ClientError::Api {
                status,
                message: err_body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let parsed: PromptResponse =
            serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))?;

        debug!("Response text: {} bytes", parsed.response.len());
        Ok(parsed.response)
    }
}
