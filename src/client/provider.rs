use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while submitting a prompt.
///
/// The UI collapses all of these into one fixed message; the variants exist
/// so the log file can say what actually went wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Client misconfigured (unparseable URL, TLS backend failure).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Body was not JSON or had no string `response` field.
    Parse(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Config(msg) => write!(f, "config error: {msg}"),
            ClientError::Network(msg) => write!(f, "network error: {msg}"),
            ClientError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ClientError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

#[async_trait]
pub trait PromptClient: Send + Sync {
    /// Human-readable target, used in logs and the title line.
    fn endpoint(&self) -> &str;

    /// Posts `prompt` and returns the server's `response` text.
    async fn submit(&self, prompt: &str) -> Result<String, ClientError>;
}
