//! Wire types for the prompt endpoint.
//!
//! ```text
//! POST /ai   {"prompt": "..."}   →   200 {"response": "..."}
//! ```

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PromptRequest {
    pub prompt: String,
}

/// Extra fields in the body are ignored; a missing `response` is a parse error.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PromptResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_single_field() {
        let req = PromptRequest {
            prompt: "Hello".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"prompt": "Hello"}));
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let body = r#"{"response":"Hi there","model":"x","tokens":3}"#;
        let parsed: PromptResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "Hi there");
    }

    #[test]
    fn test_response_without_field_is_rejected() {
        assert!(serde_json::from_str::<PromptResponse>(r#"{"answer":"nope"}"#).is_err());
        assert!(serde_json::from_str::<PromptResponse>(r#"{"response":42}"#).is_err());
    }
}
