//! Session store port.
//!
//! Defines the contract for keeping per-user sessions for the lifetime of
//! the process. The store itself only guarantees consistent reads and
//! writes; per-user serialization of read-modify-write cycles is the
//! application layer's job.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::UserId;
use crate::domain::session::Session;

/// Errors raised by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    #[error("Session storage failed: {0}")]
    Backend(String),
}

/// Store port for per-user sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the user's session, if one exists.
    async fn get(&self, user_id: &UserId) -> Result<Option<Session>, SessionStoreError>;

    /// Inserts or replaces the user's session.
    async fn put(&self, session: Session) -> Result<(), SessionStoreError>;

    /// Removes the user's session, if any.
    async fn remove(&self, user_id: &UserId) -> Result<(), SessionStoreError>;
}
