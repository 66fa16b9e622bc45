//! Telegram Bot API wire types.
//!
//! Only the fields this system reads are modeled; unknown fields are
//! ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Envelope returned by Bot API methods.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

/// One update from `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<IncomingMessage>,
}

/// An inbound message. Non-text messages carry `text: None` and are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub chat: Chat,
    pub text: Option<String>,
}

/// The chat a message belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Body for `sendMessage`.
#[derive(Debug, Serialize)]
pub struct OutgoingMessage<'a> {
    pub chat_id: i64,
    pub text: &'a str,
}
