//! Request/response DTOs for the message endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::OutboundReply;

/// Inbound message request body.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    /// Transport-assigned user identifier.
    pub user_id: String,

    /// Raw message text.
    pub text: String,

    /// Command arguments, when the bridge has already split them off.
    #[serde(default)]
    pub command_args: Option<Vec<String>>,
}

/// Reply response body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub user_id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_replies: Option<Vec<String>>,
}

impl From<OutboundReply> for MessageResponse {
    fn from(reply: OutboundReply) -> Self {
        Self {
            user_id: reply.user_id.to_string(),
            text: reply.text,
            suggested_replies: reply.suggested_replies,
        }
    }
}

/// Health check response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl ErrorResponse {
    /// Client-side error (malformed request).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: "bad_request",
            message: message.into(),
        }
    }

    /// Server-side error; details stay in the logs.
    pub fn internal() -> Self {
        Self {
            error: "internal_error",
            message: "Request could not be processed".to_string(),
        }
    }
}
