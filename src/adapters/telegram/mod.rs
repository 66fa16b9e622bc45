//! Telegram Bot API transport.
//!
//! - `types` - Wire DTOs for the Bot API subset this system uses
//! - `client` - HTTP client for `getUpdates` / `sendMessage`
//! - `poller` - Long-polling loop feeding the event dispatcher

mod client;
mod poller;
mod types;

pub use client::{TelegramClient, TelegramConfig, TransportError};
pub use poller::{classify_update, UpdatePoller};
pub use types::{Chat, IncomingMessage, Update};
