//! Session Store Port - Interface for per-chat session persistence.
//!
//! One `IntakeSession` per active chat. The store itself is a plain map;
//! per-chat serialization of load-mutate-save cycles is the dialogue
//! engine's responsibility.

use async_trait::async_trait;

use crate::domain::foundation::ChatId;
use crate::domain::intake::IntakeSession;

/// Errors that can occur during session store operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("No session found for chat: {0}")]
    NotFound(ChatId),

    #[error("Storage failure: {0}")]
    Backend(String),
}

/// Port for persisting and loading intake sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Saves a session, overwriting any existing session for the same chat.
    async fn save(&self, session: &IntakeSession) -> Result<(), SessionStoreError>;

    /// Loads the session for a chat.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session exists.
    async fn load(&self, chat_id: ChatId) -> Result<IntakeSession, SessionStoreError>;

    /// Checks whether a session exists for a chat.
    async fn exists(&self, chat_id: ChatId) -> Result<bool, SessionStoreError>;

    /// Deletes the session for a chat. Deleting an absent session is Ok.
    async fn delete(&self, chat_id: ChatId) -> Result<(), SessionStoreError>;
}
