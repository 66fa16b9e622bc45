//! Intake Session Entity
//!
//! Tracks the complete state of one intake conversation: the current
//! dialogue state and every answer collected so far.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::ChatId;

use super::slot::{Slot, SlotSequence};

/// Current position of the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueState {
    /// Waiting for the answer to the given slot.
    Collecting(Slot),
    /// All slots answered; accepting free-text questions until the exit token.
    OpenQuestion,
}

/// Mutable per-chat record of dialogue state and collected answers.
///
/// Answers are stored verbatim, one entry per slot transition; the map never
/// shrinks. Only the dialogue engine mutates a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeSession {
    chat_id: ChatId,
    state: DialogueState,
    answers: HashMap<Slot, String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl IntakeSession {
    /// Creates a fresh session positioned at the first slot.
    pub fn new(chat_id: ChatId) -> Self {
        let now = Utc::now();
        Self {
            chat_id,
            state: DialogueState::Collecting(SlotSequence::first()),
            answers: HashMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the verbatim answer stored for a slot, if any.
    pub fn answer(&self, slot: Slot) -> Option<&str> {
        self.answers.get(&slot).map(String::as_str)
    }

    /// Number of slots answered so far.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Stores a verbatim answer for a slot. Empty strings are accepted.
    pub fn record_answer(&mut self, slot: Slot, text: impl Into<String>) {
        self.answers.insert(slot, text.into());
        self.updated_at = Utc::now();
    }

    /// Moves the dialogue to the given slot.
    pub fn advance_to(&mut self, slot: Slot) {
        self.state = DialogueState::Collecting(slot);
        self.updated_at = Utc::now();
    }

    /// Enters the terminal open-question loop.
    pub fn enter_open_question(&mut self) {
        self.state = DialogueState::OpenQuestion;
        self.updated_at = Utc::now();
    }

    /// Returns true once the session has left the collection phase.
    pub fn is_open_question(&self) -> bool {
        self.state == DialogueState::OpenQuestion
    }

    /// Collected answers as (answer key, text) pairs in slot order.
    pub fn answers_in_order(&self) -> Vec<(&'static str, &str)> {
        SlotSequence::specs()
            .iter()
            .filter_map(|spec| {
                self.answer(spec.slot).map(|text| (spec.key, text))
            })
            .collect()
    }
}
