//! HTTP handlers for the message endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::HandleMessageHandler;
use crate::domain::conversation::InboundEvent;
use crate::domain::foundation::UserId;

use super::dto::{ErrorResponse, HealthResponse, MessageRequest, MessageResponse};

/// Handler state shared by the message routes.
#[derive(Clone)]
pub struct MessageHandlers {
    handle_message: Arc<HandleMessageHandler>,
}

impl MessageHandlers {
    pub fn new(handle_message: Arc<HandleMessageHandler>) -> Self {
        Self { handle_message }
    }
}

/// POST /api/messages - Dispatch one inbound event, returning the reply.
pub async fn post_message(
    State(handlers): State<MessageHandlers>,
    Json(req): Json<MessageRequest>,
) -> Response {
    let user_id = match UserId::new(req.user_id) {
        Ok(id) => id,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let mut event = InboundEvent::new(user_id, req.text);
    if let Some(args) = req.command_args {
        event = event.with_args(args);
    }

    match handlers.handle_message.handle(event).await {
        Ok(reply) => (StatusCode::OK, Json(MessageResponse::from(reply))).into_response(),
        Err(e) => {
            error!(error = %e, "message handling failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}

/// GET /health - Liveness probe.
pub async fn health() -> Response {
    (StatusCode::OK, Json(HealthResponse::ok())).into_response()
}
