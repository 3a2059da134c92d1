//! Command handlers.

mod handle_message;

pub use handle_message::{HandleMessageError, HandleMessageHandler};
