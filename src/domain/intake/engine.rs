//! Dialogue State Machine
//!
//! Orchestrates the intake conversation: sequences through the fixed slots,
//! resolves keyword suggestions when the last slot is filled, then loops in
//! the open-question phase until the exit token.
//!
//! All operations for one chat are serialized behind a per-chat mutex held
//! for the whole load-mutate-save cycle, including any in-flight completion
//! call, so two events for the same chat never consume the same slot.
//! Events for different chats proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::ChatId;
use crate::domain::keywords::KeywordTable;
use crate::ports::{CompletionClient, CompletionRequest, SessionStore, SessionStoreError};

use super::messages;
use super::session::{DialogueState, IntakeSession};
use super::slot::{Slot, SlotSequence};

/// Errors surfaced by dialogue operations.
///
/// Completion failures are not represented here: the engine recovers from
/// them locally with an apologetic reply and the session left unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DialogueError {
    #[error("No active session for chat: {0}")]
    NoActiveSession(ChatId),

    #[error(transparent)]
    Store(SessionStoreError),
}

/// The dialogue state machine.
pub struct DialogueEngine {
    store: Arc<dyn SessionStore>,
    completion: Arc<dyn CompletionClient>,
    keywords: Arc<KeywordTable>,
    // One mutex per chat; entries are retained for the process lifetime.
    locks: Mutex<HashMap<ChatId, Arc<Mutex<()>>>>,
}

impl DialogueEngine {
    pub fn new(
        store: Arc<dyn SessionStore>,
        completion: Arc<dyn CompletionClient>,
        keywords: Arc<KeywordTable>,
    ) -> Self {
        Self {
            store,
            completion,
            keywords,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Creates or overwrites the session for a chat and returns the welcome
    /// line followed by the first prompt. A prior session for the same chat
    /// is discarded without carrying over old answers.
    pub async fn begin(&self, chat_id: ChatId) -> Result<Vec<String>, DialogueError> {
        let _guard = self.chat_guard(chat_id).await;

        let session = IntakeSession::new(chat_id);
        self.store
            .save(&session)
            .await
            .map_err(DialogueError::Store)?;

        tracing::info!(chat = %chat_id, "Intake session started");

        Ok(vec![
            messages::WELCOME.to_string(),
            SlotSequence::prompt(SlotSequence::first()).to_string(),
        ])
    }

    /// Feeds one inbound text into the session for a chat.
    ///
    /// In the collection phase the text is stored verbatim under the current
    /// slot and the next prompt is returned; leaving the last slot also
    /// resolves the keyword suggestion. In the open-question phase the text
    /// is either the exit token (destroying the session) or a question for
    /// the completion service.
    pub async fn advance(&self, chat_id: ChatId, text: &str) -> Result<Vec<String>, DialogueError> {
        let _guard = self.chat_guard(chat_id).await;

        let session = self.store.load(chat_id).await.map_err(|err| match err {
            SessionStoreError::NotFound(_) => DialogueError::NoActiveSession(chat_id),
            other => DialogueError::Store(other),
        })?;

        match session.state() {
            DialogueState::Collecting(slot) => self.fill_slot(session, slot, text).await,
            DialogueState::OpenQuestion => self.answer_question(chat_id, text).await,
        }
    }

    /// Explicit termination path, independent of the open-question loop.
    /// Idempotently destroys any session present and returns the farewell.
    pub async fn end(&self, chat_id: ChatId) -> Result<Vec<String>, DialogueError> {
        let _guard = self.chat_guard(chat_id).await;

        self.store
            .delete(chat_id)
            .await
            .map_err(DialogueError::Store)?;

        tracing::info!(chat = %chat_id, "Intake session ended");

        Ok(vec![messages::FAREWELL.to_string()])
    }

    async fn fill_slot(
        &self,
        mut session: IntakeSession,
        slot: Slot,
        text: &str,
    ) -> Result<Vec<String>, DialogueError> {
        session.record_answer(slot, text);

        match SlotSequence::next(slot) {
            Some(next) => {
                session.advance_to(next);
                self.store
                    .save(&session)
                    .await
                    .map_err(DialogueError::Store)?;
                Ok(vec![SlotSequence::prompt(next).to_string()])
            }
            None => {
                session.enter_open_question();
                let suggestion = self
                    .keywords
                    .resolve(session.answer(Slot::Industry).unwrap_or(""));
                self.store
                    .save(&session)
                    .await
                    .map_err(DialogueError::Store)?;

                tracing::info!(
                    chat = %session.chat_id(),
                    answers = session.answered_count(),
                    "Intake complete, entering open questions"
                );

                Ok(vec![
                    messages::keyword_suggestion_line(&suggestion),
                    messages::OPEN_QUESTION_INVITATION.to_string(),
                ])
            }
        }
    }

    async fn answer_question(
        &self,
        chat_id: ChatId,
        text: &str,
    ) -> Result<Vec<String>, DialogueError> {
        // Exact match, case-insensitive, no trimming.
        if text.eq_ignore_ascii_case(messages::EXIT_TOKEN) {
            self.store
                .delete(chat_id)
                .await
                .map_err(DialogueError::Store)?;
            tracing::info!(chat = %chat_id, "Session ended via exit token");
            return Ok(vec![messages::FAREWELL.to_string()]);
        }

        let request = CompletionRequest::question(text);
        let trace_id = request.trace_id;

        match self.completion.complete(request).await {
            Ok(response) => Ok(vec![
                response.content,
                messages::FOLLOW_UP_PROMPT.to_string(),
            ]),
            Err(err) => {
                tracing::warn!(
                    chat = %chat_id,
                    trace = %trace_id,
                    error = %err,
                    "Completion call failed, staying in open-question state"
                );
                Ok(vec![messages::COMPLETION_UNAVAILABLE.to_string()])
            }
        }
    }

    async fn chat_guard(&self, chat_id: ChatId) -> tokio::sync::OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(chat_id).or_default().clone()
        };
        lock.lock_owned().await
    }
}
