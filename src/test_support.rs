//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{ClientError, PromptClient};

/// A client that answers every prompt with the same canned result and
/// remembers what it was sent.
pub struct StaticClient {
    result: Result<String, ClientError>,
    received: Mutex<Vec<String>>,
}

impl StaticClient {
    pub fn ok(text: &str) -> Self {
        Self::with_result(Ok(text.to_string()))
    }

    pub fn api_error(status: u16) -> Self {
        Self::with_result(Err(ClientError::Api {
            status,
            message: "mock failure".to_string(),
        }))
    }

    pub fn with_result(result: Result<String, ClientError>) -> Self {
        Self {
            result,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PromptClient for StaticClient {
    fn endpoint(&self) -> &str {
        "static://test"
    }

    async fn submit(&self, prompt: &str) -> Result<String, ClientError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(prompt.to_string());
        }
        self.result.clone()
    }
}
