//! # Prompt Client
//!
//! Everything that talks to the remote endpoint lives here. The rest of the
//! crate only sees the [`PromptClient`] trait, so the TUI and the core can be
//! exercised against fakes without a server.

pub mod http;
pub mod provider;
pub mod types;

pub use http::HttpPromptClient;
pub use provider::{ClientError, PromptClient};
pub use types::{PromptRequest, PromptResponse};
