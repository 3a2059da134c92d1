//! Inbound and outbound conversation values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// A single inbound text event from the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Transport-assigned user identifier.
    pub user_id: UserId,

    /// The raw message text.
    pub text: String,

    /// Command arguments, when the transport has already split them off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_args: Option<Vec<String>>,
}

impl InboundEvent {
    /// Creates a plain text event.
    pub fn new(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
            command_args: None,
        }
    }

    /// Attaches pre-split command arguments.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.command_args = Some(args);
        self
    }
}

/// A reply produced by the conversation core.
///
/// The core never performs delivery; the transport layer decides how to
/// render the suggested replies (reply keyboard, quick replies, plain list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundReply {
    /// User the reply is addressed to.
    pub user_id: UserId,

    /// Reply text.
    pub text: String,

    /// Ordered quick-reply options, when the next input is a selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_replies: Option<Vec<String>>,
}

impl OutboundReply {
    /// Creates a plain text reply.
    pub fn new(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
            suggested_replies: None,
        }
    }

    /// Attaches suggested replies.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggested_replies = Some(suggestions);
        self
    }
}
