//! Inbound events from the messaging transport.

use crate::domain::foundation::ChatId;

/// One event delivered by the transport, already classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Start (or restart) the intake conversation.
    Start { chat: ChatId },
    /// A free-text message: a slot answer, a question, or the exit token.
    Text { chat: ChatId, text: String },
    /// Explicit exit command, valid in any state.
    Exit { chat: ChatId },
    /// Standalone trend report request, independent of dialogue state.
    TrendReport { chat: ChatId },
}

impl InboundEvent {
    /// The chat this event belongs to.
    pub fn chat_id(&self) -> ChatId {
        match self {
            InboundEvent::Start { chat }
            | InboundEvent::Text { chat, .. }
            | InboundEvent::Exit { chat }
            | InboundEvent::TrendReport { chat } => *chat,
        }
    }
}
