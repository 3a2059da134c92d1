//! Shared domain primitives (identifiers, errors, state machine trait).

mod errors;
mod ids;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;
pub use state_machine::StateMachine;
