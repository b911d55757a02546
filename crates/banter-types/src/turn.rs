//! Conversation turn types for Banter.
//!
//! A [`Turn`] is one recorded user-message/bot-reply pair. Callers build a
//! [`NewTurn`] (which validates the user input) and hand it to a store; the
//! store stamps it with the append time and the result is immutable.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// On-disk and over-the-wire timestamp layout: local time, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recorded interaction in the conversation log.
///
/// Turns are ordered by append time, oldest first. The `timestamp` is
/// assigned by the store, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user_input: String,
    pub bot_response: String,
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

impl Turn {
    /// Stamp a validated turn with the given time.
    pub fn stamp(turn: NewTurn, timestamp: NaiveDateTime) -> Self {
        Self {
            user_input: turn.user_input,
            bot_response: turn.bot_response,
            timestamp,
        }
    }

    /// The timestamp rendered as `YYYY-MM-DD HH:MM:SS`.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// A turn that has not been appended yet.
///
/// Construction enforces the one invariant callers are responsible for:
/// `user_input` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTurn {
    user_input: String,
    bot_response: String,
}

impl NewTurn {
    pub fn new(
        user_input: impl Into<String>,
        bot_response: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let user_input = user_input.into();
        if user_input.is_empty() {
            return Err(ValidationError::NoMessage);
        }
        Ok(Self {
            user_input,
            bot_response: bot_response.into(),
        })
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn bot_response(&self) -> &str {
        &self.bot_response
    }
}

/// Current local time truncated to whole seconds.
///
/// Truncation keeps an appended turn equal to the same turn read back from
/// storage, since the persisted format has no sub-second component.
pub fn now_timestamp() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Parse a timestamp in [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
}

/// Serde adapter for the fixed `YYYY-MM-DD HH:MM:SS` layout.
pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&dt.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
