// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! HTML rendering for chat content.
//!
//! This module wraps transformed message text in per-message chat-bubble
//! containers and assembles standalone HTML documents. Two input modes are
//! supported:
//!
//! - **Raw text** ([`render_raw`]): a whole file is one message with no
//!   sender or timestamp.
//! - **Structured log** ([`render_log`]): each [`ChatEntry`] becomes one
//!   message block with an escaped `timestamp sender:` header line, in
//!   input order — append-only, no reordering.
//!
//! # Output Format
//!
//! Each message renders as a `<div class="message">` block. The message
//! body goes through [`markup::transform`](crate::markup::transform);
//! sender and timestamp are metadata and are only HTML-escaped, never
//! markup-transformed. [`render_document`] wraps the concatenated blocks in
//! a fixed skeleton (doctype, charset, viewport, embedded stylesheet).
//!
//! # Example
//!
//! ```
//! use wa2html::parser::parse_chat_log;
//! use wa2html::renderer::{render_document, render_log, RenderOptions};
//!
//! let log = parse_chat_log(r#"{ "chat_log": [["Bob", "*hey*", "10:01"]] }"#).unwrap();
//! let body = render_log(&log);
//!
//! assert!(body.contains("<b>hey</b>"));
//!
//! let html = render_document(&body, &RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

use crate::markup::{escape_html, transform};
use crate::parser::{ChatEntry, ChatLog};
use std::fmt::Write;

/// Configuration options for document assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// The document title, HTML-escaped into `<title>`.
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "WhatsApp Formatter Output".into(),
        }
    }
}

/// The embedded stylesheet: chat-bubble layout plus utility classes.
/// `.underline` and `.emoji` are declared for hand-tweaked exports; the
/// renderer never emits them.
const STYLE: &str = "
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    background-color: #e5ddd5;
    color: #000;
    padding: 20px;
}
.message {
    background-color: #dcf8c6;
    border-radius: 10px;
    padding: 10px;
    margin: 5px 0;
    max-width: 70%;
    word-wrap: break-word;
}
.bold { font-weight: bold; }
.italic { font-style: italic; }
.underline { text-decoration: underline; }
.strikethrough { text-decoration: line-through; }
.emoji { font-size: 1.2em; }
";

/// Renders raw text as a single message block.
///
/// The entire input is treated as one message body: transformed, then
/// wrapped in one `<div class="message">` container.
#[must_use]
pub fn render_raw(text: &str) -> String {
    format!("<div class=\"message\"><p>{}</p></div>", transform(text))
}

/// Renders a structured chat log as concatenated message blocks.
///
/// Entries render in input order. An empty log renders to an empty string.
#[must_use]
pub fn render_log(log: &ChatLog) -> String {
    let mut out = String::new();
    for entry in &log.entries {
        render_entry(&mut out, entry);
    }
    out
}

fn render_entry(out: &mut String, entry: &ChatEntry) {
    write!(
        out,
        "<div class=\"message\"><p>{} <b>{}:</b></p><p>{}</p></div>",
        escape_html(&entry.timestamp),
        escape_html(&entry.sender),
        transform(&entry.message),
    )
    .unwrap();
}

/// Wraps concatenated message blocks in a standalone HTML document.
///
/// The skeleton is fixed: doctype, `lang="en"`, UTF-8 charset, viewport
/// meta, the embedded stylesheet, and the body. Only the title varies, via
/// [`RenderOptions`].
#[must_use]
pub fn render_document(body: &str, opts: &RenderOptions) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\"><head><meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title><style>{STYLE}</style></head>\n\
         <body>{body}</body></html>\n",
        title = escape_html(&opts.title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sender: &str, message: &str, timestamp: &str) -> ChatEntry {
        ChatEntry {
            sender: sender.into(),
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }

    fn log(entries: Vec<ChatEntry>) -> ChatLog {
        ChatLog { entries }
    }

    #[test]
    fn raw_mode_wraps_one_message() {
        assert_eq!(
            render_raw("hello"),
            "<div class=\"message\"><p>hello</p></div>"
        );
    }

    #[test]
    fn raw_mode_transforms_markup() {
        let html = render_raw("*hi*\n_there_");
        assert_eq!(
            html,
            "<div class=\"message\"><p><b>hi</b><br><i>there</i></p></div>"
        );
    }

    #[test]
    fn log_entry_layout() {
        let html = render_log(&log(vec![entry("Alice", "hi", "10:00")]));
        assert_eq!(
            html,
            "<div class=\"message\"><p>10:00 <b>Alice:</b></p><p>hi</p></div>"
        );
    }

    #[test]
    fn log_entries_render_in_input_order() {
        let html = render_log(&log(vec![
            entry("Alice", "hi", "10:00"),
            entry("Bob", "*hey*", "10:01"),
        ]));

        let alice = html.find("Alice").unwrap();
        let bob = html.find("Bob").unwrap();
        assert!(alice < bob);
        // Only Bob's message body carries markup.
        assert!(html.contains("<p><b>hey</b></p>"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn sender_and_timestamp_are_escaped_not_transformed() {
        let html = render_log(&log(vec![entry("*Bob*", "ok", "<10:00>")]));

        assert!(html.contains("<b>*Bob*:</b>"));
        assert!(html.contains("&lt;10:00&gt;"));
        assert!(!html.contains("<b><b>"));
    }

    #[test]
    fn empty_log_renders_nothing() {
        assert_eq!(render_log(&log(vec![])), "");
    }

    #[test]
    fn document_skeleton() {
        let html = render_document("<div class=\"message\"></div>", &RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<meta charset=\"UTF-8\">"));
        assert!(html.contains("<title>WhatsApp Formatter Output</title>"));
        assert!(html.contains(".message {"));
        assert!(html.contains("<body><div class=\"message\"></div></body></html>"));
    }

    #[test]
    fn document_title_is_escaped() {
        let opts = RenderOptions {
            title: "A & B <chat>".into(),
        };
        let html = render_document("", &opts);

        assert!(html.contains("<title>A &amp; B &lt;chat&gt;</title>"));
    }

    #[test]
    fn stylesheet_keeps_unused_utility_classes() {
        let html = render_document("", &RenderOptions::default());

        assert!(html.contains(".underline { text-decoration: underline; }"));
        assert!(html.contains(".emoji { font-size: 1.2em; }"));
    }
}
