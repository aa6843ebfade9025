// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! JSON parsing for structured chat logs.
//!
//! This module handles deserialization of the JSON chat-log format: an
//! object whose `"chat_log"` key maps to an array of `[sender, message,
//! timestamp]` triples, all three strings.
//!
//! # Format Overview
//!
//! - The key may be absent, which yields an empty log (zero entries), not
//!   an error.
//! - Malformed JSON, a non-array value, a triple of the wrong length, or a
//!   non-string element all fail with [`ParseError`] before any rendering
//!   happens.
//!
//! # Example
//!
//! ```
//! use wa2html::parser::parse_chat_log;
//!
//! let json = r#"{
//!     "chat_log": [
//!         ["Alice", "hi", "10:00"],
//!         ["Bob", "*hey*", "10:01"]
//!     ]
//! }"#;
//!
//! let log = parse_chat_log(json).unwrap();
//! assert_eq!(log.entries.len(), 2);
//! assert_eq!(log.entries[0].sender, "Alice");
//! ```

use serde::Deserialize;
use snafu::prelude::*;

/// Error type for JSON parsing failures.
#[derive(Debug, Snafu)]
pub enum ParseError {
    /// Failed to parse JSON content.
    #[snafu(display("failed to parse JSON: {source}"))]
    Json {
        /// The underlying JSON parsing error.
        source: serde_json::Error,
    },
}

/// One message in a structured chat log.
///
/// Deserialized from a 3-element JSON array. All fields are arbitrary
/// display text: the renderer HTML-escapes `sender` and `timestamp`, and
/// only `message` receives markup treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    /// Display name of the sender.
    pub sender: String,

    /// Raw message body; may contain markup delimiters, newlines, emoji.
    pub message: String,

    /// Timestamp text, shown verbatim (format not validated).
    pub timestamp: String,
}

impl<'de> Deserialize<'de> for ChatEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (sender, message, timestamp) = <(String, String, String)>::deserialize(deserializer)?;
        Ok(Self {
            sender,
            message,
            timestamp,
        })
    }
}

/// A parsed structured chat log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatLog {
    /// The messages, in file order.
    #[serde(default, rename = "chat_log")]
    pub entries: Vec<ChatEntry>,
}

/// Parses a JSON string into a [`ChatLog`].
///
/// This is the main entry point for the structured input mode.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the `chat_log` entries
/// don't match the expected `[sender, message, timestamp]` shape.
///
/// # Example
///
/// ```
/// use wa2html::parser::parse_chat_log;
///
/// let log = parse_chat_log("{}").unwrap();
/// assert!(log.entries.is_empty());
/// ```
pub fn parse_chat_log(json_str: &str) -> Result<ChatLog, ParseError> {
    serde_json::from_str(json_str).context(JsonSnafu)
}
