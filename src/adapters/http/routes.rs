//! HTTP routes for the service.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health, post_message, MessageHandlers};

/// Creates the message router.
pub fn message_routes(handlers: MessageHandlers) -> Router {
    Router::new()
        .route("/", post(post_message))
        .with_state(handlers)
}

/// Creates the full application router.
///
/// The request timeout belongs to this transport layer; the conversation
/// core itself never blocks.
pub fn app_router(handlers: MessageHandlers, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/api/messages", message_routes(handlers))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}
