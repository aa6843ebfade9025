// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Convert WhatsApp chat exports to styled HTML.
//!
//! This crate provides parsing and rendering functionality for transforming
//! WhatsApp-style chat exports — plain-text dumps or structured JSON chat
//! logs — into standalone HTML documents with chat-bubble styling.
//!
//! # Overview
//!
//! WhatsApp text uses ad-hoc inline markup (`*bold*`, `_italic_`,
//! `~strikethrough~`). This crate:
//!
//! 1. Translates raw message text into safely-escaped HTML fragments
//! 2. Parses structured JSON chat logs into typed Rust representations
//! 3. Renders messages as chat-bubble blocks inside a complete HTML page
//!
//! # Example
//!
//! ```no_run
//! use wa2html::{parser, renderer};
//!
//! let json = std::fs::read_to_string("chat.json").unwrap();
//! let log = parser::parse_chat_log(&json).unwrap();
//!
//! let body = renderer::render_log(&log);
//! let html = renderer::render_document(&body, &renderer::RenderOptions::default());
//! println!("{html}");
//! ```
//!
//! # Modules
//!
//! - [`markup`]: raw chat text to HTML fragment translation
//! - [`parser`]: JSON parsing and type definitions for structured chat logs
//! - [`renderer`]: message-block and document generation

#![deny(missing_docs)]

pub mod markup;
pub mod parser;
pub mod renderer;
