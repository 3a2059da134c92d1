//! HTTP delivery surface.
//!
//! The only transport shipped with the service: inbound events arrive as
//! JSON posts and replies are returned in the response body. A chat
//! platform bridge is expected to sit in front of this API.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, HealthResponse, MessageRequest, MessageResponse};
pub use handlers::MessageHandlers;
pub use routes::app_router;
