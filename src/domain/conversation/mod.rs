//! Transport-agnostic conversation values.
//!
//! Inbound events and outbound replies are the only things exchanged with
//! the delivery layer; classification and reply wording live here so the
//! core never depends on any chat platform's text-matching mechanism.

mod event;
mod input;
pub mod replies;

pub use event::{InboundEvent, OutboundReply};
pub use input::{classify, parse_week_argument, UserInput, RESTART_PHRASE};
