//! Event dispatcher - the per-event error boundary.
//!
//! Maps each inbound event to the ordered list of outbound messages for its
//! chat. Every failure below this point is caught and rendered as a
//! user-visible message; nothing propagates far enough to crash the process.

use std::sync::Arc;

use crate::domain::intake::{messages, DialogueEngine, DialogueError};
use crate::ports::{TrendRow, TrendSource};

use super::events::InboundEvent;

/// Routes inbound events to the dialogue engine and the trend source.
pub struct EventDispatcher {
    engine: Arc<DialogueEngine>,
    trends: Arc<dyn TrendSource>,
}

impl EventDispatcher {
    pub fn new(engine: Arc<DialogueEngine>, trends: Arc<dyn TrendSource>) -> Self {
        Self { engine, trends }
    }

    /// Handles one event, returning the outbound messages in delivery order.
    pub async fn dispatch(&self, event: InboundEvent) -> Vec<String> {
        match event {
            InboundEvent::Start { chat } => self.render(self.engine.begin(chat).await),
            InboundEvent::Text { chat, text } => {
                self.render(self.engine.advance(chat, &text).await)
            }
            InboundEvent::Exit { chat } => self.render(self.engine.end(chat).await),
            InboundEvent::TrendReport { chat } => match self.trends.fetch_trends().await {
                Ok(rows) => vec![render_trend_report(&rows)],
                Err(err) => {
                    tracing::warn!(chat = %chat, error = %err, "Trend fetch failed");
                    vec![messages::TRENDS_UNAVAILABLE.to_string()]
                }
            },
        }
    }

    fn render(&self, result: Result<Vec<String>, DialogueError>) -> Vec<String> {
        match result {
            Ok(replies) => replies,
            Err(DialogueError::NoActiveSession(chat)) => {
                tracing::debug!(chat = %chat, "Text event without active session");
                vec![messages::NO_ACTIVE_SESSION.to_string()]
            }
            Err(DialogueError::Store(err)) => {
                tracing::error!(error = %err, "Session store failure");
                vec![messages::INTERNAL_FAILURE.to_string()]
            }
        }
    }
}

/// Formats the trend report: header line, then one line per row in scrape
/// order, as a single multi-line message.
fn render_trend_report(rows: &[TrendRow]) -> String {
    let mut report = String::from(messages::TRENDS_HEADER);
    for row in rows {
        report.push('\n');
        report.push_str(&row.industry);
        report.push_str(": ");
        report.push_str(&row.cost_per_click);
    }
    report
}
