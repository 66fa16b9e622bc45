//! In-Memory Session Store Adapter
//!
//! Holds active intake sessions in a process-local map. Sessions do not
//! survive a restart; that matches the system's lifetime contract.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ChatId;
use crate::domain::intake::IntakeSession;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for intake sessions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<ChatId, IntakeSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored sessions (useful for tests).
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Number of active sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &IntakeSession) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.chat_id(), session.clone());
        Ok(())
    }

    async fn load(&self, chat_id: ChatId) -> Result<IntakeSession, SessionStoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&chat_id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(chat_id))
    }

    async fn exists(&self, chat_id: ChatId) -> Result<bool, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.contains_key(&chat_id))
    }

    async fn delete(&self, chat_id: ChatId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(&chat_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::Slot;

    fn test_session(chat_id: ChatId) -> IntakeSession {
        IntakeSession::new(chat_id)
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let store = InMemorySessionStore::new();
        let chat_id = ChatId::new(1);
        let session = test_session(chat_id);

        store.save(&session).await.unwrap();
        let loaded = store.load(chat_id).await.unwrap();

        assert_eq!(loaded, session);
    }

    #[tokio::test]
    async fn load_missing_session_is_not_found() {
        let store = InMemorySessionStore::new();

        let result = store.load(ChatId::new(2)).await;

        assert!(matches!(result, Err(SessionStoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn save_overwrites_previous_session() {
        let store = InMemorySessionStore::new();
        let chat_id = ChatId::new(3);

        let mut first = test_session(chat_id);
        first.record_answer(Slot::Industry, "retail");
        store.save(&first).await.unwrap();

        let fresh = test_session(chat_id);
        store.save(&fresh).await.unwrap();

        let loaded = store.load(chat_id).await.unwrap();
        assert_eq!(loaded.answered_count(), 0);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn exists_tracks_lifecycle() {
        let store = InMemorySessionStore::new();
        let chat_id = ChatId::new(4);

        assert!(!store.exists(chat_id).await.unwrap());
        store.save(&test_session(chat_id)).await.unwrap();
        assert!(store.exists(chat_id).await.unwrap());
        store.delete(chat_id).await.unwrap();
        assert!(!store.exists(chat_id).await.unwrap());
    }

    #[tokio::test]
    async fn delete_absent_session_is_ok() {
        let store = InMemorySessionStore::new();

        assert!(store.delete(ChatId::new(5)).await.is_ok());
    }

    #[tokio::test]
    async fn sessions_are_isolated_per_chat() {
        let store = InMemorySessionStore::new();
        let mut a = test_session(ChatId::new(6));
        a.record_answer(Slot::Industry, "bakery");
        let b = test_session(ChatId::new(7));

        store.save(&a).await.unwrap();
        store.save(&b).await.unwrap();

        let loaded_b = store.load(ChatId::new(7)).await.unwrap();
        assert_eq!(loaded_b.answered_count(), 0);
        assert_eq!(store.session_count().await, 2);
    }

    #[tokio::test]
    async fn store_is_shareable_across_tasks() {
        let store = InMemorySessionStore::new();
        let chat_id = ChatId::new(8);
        let session = test_session(chat_id);

        let writer = store.clone();
        let handle = tokio::spawn(async move {
            writer.save(&session).await.unwrap();
        });
        handle.await.unwrap();

        assert!(store.exists(chat_id).await.unwrap());
    }
}
