// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Integration tests for wa2html parsing and rendering.

use wa2html::renderer::{RenderOptions, render_document, render_log, render_raw};
use wa2html::{markup, parser};

/// Runs a structured JSON log through the full pipeline.
#[test]
fn json_log_to_document() {
    let json = r#"{
        "chat_log": [
            ["Alice", "hi", "10:00"],
            ["Bob", "*hey* _you_", "10:01"],
            ["Alice", "line one\nline two", "10:02"]
        ]
    }"#;

    let log = parser::parse_chat_log(json).unwrap();
    let body = render_log(&log);
    let html = render_document(&body, &RenderOptions::default());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>WhatsApp Formatter Output</title>"));

    // All three messages, in input order.
    let first = html.find("<p>hi</p>").expect("Alice's first message");
    let second = html
        .find("<p><b>hey</b> <i>you</i></p>")
        .expect("Bob's formatted message");
    let third = html
        .find("<p>line one<br>line two</p>")
        .expect("Alice's multiline message");
    assert!(first < second && second < third);

    assert_eq!(html.matches("<div class=\"message\">").count(), 3);
}

/// A JSON object without the chat_log key renders zero message blocks.
#[test]
fn missing_chat_log_key_renders_empty_body() {
    let log = parser::parse_chat_log("{}").unwrap();
    let body = render_log(&log);
    let html = render_document(&body, &RenderOptions::default());

    assert!(html.contains("<body></body>"));
    assert!(!html.contains("<div class=\"message\">"));
}

/// Sender names never receive markup treatment, even when they carry
/// delimiter characters.
#[test]
fn sender_markup_stays_literal() {
    let json = r#"{ "chat_log": [["*Bob*", "ok", "10:00"]] }"#;

    let log = parser::parse_chat_log(json).unwrap();
    let body = render_log(&log);

    assert!(body.contains("<b>*Bob*:</b>"));
    assert!(body.contains("<p>ok</p>"));
}

/// Raw-text mode treats the whole input as one message.
#[test]
fn raw_text_to_document() {
    let text = "hello *world*\nsecond line & a ~typo~";
    let html = render_document(&render_raw(text), &RenderOptions::default());

    assert!(html.contains(
        "<body><div class=\"message\"><p>hello <b>world</b><br>second line &amp; a <s>typo</s></p></div></body>"
    ));
}

/// Full round trip through the filesystem, as the CLI drives it.
#[test]
fn renders_chat_files_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("chat.json");
    std::fs::write(
        &json_path,
        r#"{ "chat_log": [["Alice", "see *this*", "09:15"]] }"#,
    )
    .unwrap();

    let txt_path = dir.path().join("chat.txt");
    std::fs::write(&txt_path, "plain _export_ text").unwrap();

    let json_contents = std::fs::read_to_string(&json_path).unwrap();
    let log = parser::parse_chat_log(&json_contents).unwrap();
    let structured = render_document(&render_log(&log), &RenderOptions::default());
    assert!(structured.contains("09:15 <b>Alice:</b>"));
    assert!(structured.contains("see <b>this</b>"));

    let txt_contents = std::fs::read_to_string(&txt_path).unwrap();
    let raw = render_document(&render_raw(&txt_contents), &RenderOptions::default());
    assert!(raw.contains("plain <i>export</i> text"));
}

/// Transformed fragments never leak unescaped metacharacters from the
/// original text, whatever markup surrounds them.
#[test]
fn hostile_input_is_inert() {
    let samples = [
        "<script>alert('x')</script>",
        "*<b onmouseover=\"evil()\">*",
        "a < b & \"c\" > d",
    ];

    for sample in samples {
        let fragment = markup::transform(sample);
        assert!(!fragment.contains('"'), "raw quote in {fragment:?}");
        assert!(!fragment.contains("<script"), "live tag in {fragment:?}");
        assert!(!fragment.contains("<b onmouseover"), "live attr in {fragment:?}");
    }
}
