//! User-facing reply texts.
//!
//! Every outbound line the dialogue produces is defined here so transports
//! and tests share one source of truth. Slot prompts live in the slot table.

/// Literal token that ends the open-question loop, matched case-insensitively.
pub const EXIT_TOKEN: &str = "exit";

/// Sent on conversation start, before the first slot prompt.
pub const WELCOME: &str =
    "Welcome to the Digital Marketing Assistant Bot! Let's analyze your business data.";

/// Sent after the keyword suggestion when entering the open-question phase.
pub const OPEN_QUESTION_INVITATION: &str = "You can now ask me any digital marketing question!";

/// Sent after every answered question in the open-question phase.
pub const FOLLOW_UP_PROMPT: &str = "Would you like to ask something else? (Type 'exit' to quit)";

/// Sent when the session ends, via the exit token or the explicit exit command.
pub const FAREWELL: &str = "Thank you for using the bot! Have a great day!";

/// Sent when a text event arrives for a chat with no active session.
pub const NO_ACTIVE_SESSION: &str = "No intake session is active. Send /start to begin.";

/// Sent when the completion service fails; the session stays in place.
pub const COMPLETION_UNAVAILABLE: &str =
    "Sorry, I couldn't reach the answer service. Please try your question again in a moment.";

/// Sent when the trend scrape fails; affects that command only.
pub const TRENDS_UNAVAILABLE: &str =
    "Sorry, PPC trend data is unavailable right now. Please try again later.";

/// Header line of the trend report.
pub const TRENDS_HEADER: &str = "Latest PPC Trends:";

/// Sent when a session operation fails at the storage layer.
pub const INTERNAL_FAILURE: &str = "Something went wrong on our side. Please try again.";

/// Formats the keyword-suggestion line announced when the last slot is filled.
pub fn keyword_suggestion_line(suggestion: &str) -> String {
    format!("Here are relevant keywords for your industry: {suggestion}")
}
