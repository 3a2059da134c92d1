//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors, state machine trait)
//! - `schedule` - School-week resolution from calendar dates
//! - `curriculum` - Selection vocabularies and the objective lookup table
//! - `session` - Per-user selection session and its state machine
//! - `conversation` - Inbound/outbound values, input classifier, reply wording

pub mod conversation;
pub mod curriculum;
pub mod foundation;
pub mod schedule;
pub mod session;
