//! Update polling loop.
//!
//! Pulls updates from the Bot API, classifies each into an inbound event,
//! hands it to the dispatcher, and delivers the replies in order. Transport
//! failures are logged and the loop pauses briefly before continuing; they
//! never crash the process.

use std::time::Duration;
use tokio::time::sleep;

use crate::application::{EventDispatcher, InboundEvent};
use crate::domain::foundation::ChatId;

use super::client::TelegramClient;
use super::types::Update;

/// Pause after a failed `getUpdates` call before polling again.
const POLL_RETRY_PAUSE: Duration = Duration::from_secs(5);

/// Long-polling loop over `getUpdates`.
pub struct UpdatePoller {
    client: TelegramClient,
    dispatcher: EventDispatcher,
}

impl UpdatePoller {
    pub fn new(client: TelegramClient, dispatcher: EventDispatcher) -> Self {
        Self { client, dispatcher }
    }

    /// Runs the polling loop until the process exits.
    pub async fn run(self) {
        let mut offset: i64 = 0;

        tracing::info!(
            poll_timeout_secs = self.client.poll_timeout_secs(),
            "Update poller started"
        );

        loop {
            let updates = match self.client.get_updates(offset).await {
                Ok(updates) => updates,
                Err(err) => {
                    tracing::error!(error = %err, "Failed to fetch updates");
                    sleep(POLL_RETRY_PAUSE).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);

                let Some(event) = classify_update(&update) else {
                    continue;
                };
                let chat_id = event.chat_id();

                let replies = self.dispatcher.dispatch(event).await;
                for reply in replies {
                    if let Err(err) = self.client.send_message(chat_id, &reply).await {
                        tracing::error!(chat = %chat_id, error = %err, "Failed to send reply");
                    }
                }
            }
        }
    }
}

/// Classifies one update into an inbound event.
///
/// Commands are matched on the first whitespace token, with any `@botname`
/// suffix stripped. Updates without message text are ignored.
pub fn classify_update(update: &Update) -> Option<InboundEvent> {
    let message = update.message.as_ref()?;
    let text = message.text.as_ref()?;
    let chat = ChatId::new(message.chat.id);

    let first_token = text.split_whitespace().next().unwrap_or("");
    let command = first_token.split('@').next().unwrap_or("");

    match command {
        "/start" => Some(InboundEvent::Start { chat }),
        "/exit" => Some(InboundEvent::Exit { chat }),
        "/ppc_trends" => Some(InboundEvent::TrendReport { chat }),
        _ => Some(InboundEvent::Text {
            chat,
            text: text.clone(),
        }),
    }
}
