//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod clock;
mod curriculum_source;
mod session_store;

pub use clock::Clock;
pub use curriculum_source::{CurriculumSource, CurriculumSourceError};
pub use session_store::{SessionStore, SessionStoreError};
