//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identity of a conversation, assigned by the messaging transport.
///
/// Telegram chat identifiers are signed 64-bit integers; the newtype keeps
/// them from being confused with update ids or message ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(i64);

impl ChatId {
    /// Creates a ChatId from a raw transport identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier for transport calls.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ChatId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Correlation identifier attached to outbound completion requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Creates a new random TraceId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_id_round_trips_raw_value() {
        let id = ChatId::new(-1001234567890);
        assert_eq!(id.as_i64(), -1001234567890);
        assert_eq!(id, ChatId::from(-1001234567890));
    }

    #[test]
    fn chat_id_displays_raw_value() {
        assert_eq!(ChatId::new(42).to_string(), "42");
    }

    #[test]
    fn chat_id_parses_from_string() {
        let id: ChatId = "98765".parse().unwrap();
        assert_eq!(id.as_i64(), 98765);
        assert!("not-a-number".parse::<ChatId>().is_err());
    }

    #[test]
    fn trace_ids_are_unique() {
        assert_ne!(TraceId::new(), TraceId::new());
    }

    #[test]
    fn chat_id_serializes_transparently() {
        let json = serde_json::to_string(&ChatId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
