// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! WhatsApp markup translation to HTML fragments.
//!
//! This module converts one unit of raw chat text into an HTML fragment,
//! reproducing WhatsApp's ad-hoc inline formatting:
//!
//! - `*bold*` (1–4 repeated asterisks on each side)
//! - `_italic_`
//! - `~strikethrough~`
//!
//! # Pipeline
//!
//! [`transform`] applies a fixed sequence of passes, each operating on the
//! previous pass's output:
//!
//! 1. HTML-escape `&`, `<`, `>`, `"`, `'`
//! 2. Run-length-aware bold pass over `*` runs
//! 3. Literal newlines become `<br>`
//! 4. Italic pass: `_` occurrences pair up left-to-right as `<i>`/`</i>`
//! 5. Strikethrough pass: `~` occurrences pair up as `<s>`/`</s>`
//!
//! The order is load-bearing: escaping first means user-supplied angle
//! brackets can never collide with the tags later passes insert.
//! Supplementary-plane characters (emoji) need no normalization pass here:
//! a `String` holds Unicode scalar values, so surrogate pairs cannot occur
//! and such characters flow through every pass untouched.
//!
//! # Example
//!
//! ```
//! use wa2html::markup::transform;
//!
//! assert_eq!(transform("*hi* there"), "<b>hi</b> there");
//! assert_eq!(transform("a & b"), "a &amp; b");
//! ```

/// Escapes the five HTML metacharacters.
///
/// Replaces `&`, `<`, `>`, `"`, `'` with their entity equivalents. This is
/// the first transformer pass, and the renderer also applies it directly to
/// metadata fields (sender, timestamp, title) that must never receive
/// markup treatment.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Converts raw chat text into an HTML fragment.
///
/// Total over all inputs; never fails. The output contains only tags from
/// `<b>`, `<i>`, `<s>`, `<br>` plus escaped text, and every emitted opening
/// tag has a matching closing tag (empty `<i></i>`/`<s></s>` pairs are
/// stripped; the bold scanner cannot produce an empty pair since a span
/// requires at least one content character).
///
/// # Example
///
/// ```
/// use wa2html::markup::transform;
///
/// assert_eq!(transform("**a**"), "<b>*a*</b>");
/// assert_eq!(transform("_a_ and ~b~"), "<i>a</i> and <s>b</s>");
/// assert_eq!(transform("line\nbreak"), "line<br>break");
/// ```
#[must_use]
pub fn transform(text: &str) -> String {
    let text = escape_html(text);
    let text = bold_pass(&text);
    let text = text.replace('\n', "<br>");
    let text = alternating_pass(&text, '_', "<i>", "</i>");
    alternating_pass(&text, '~', "<s>", "</s>")
}

/// Rewrites `*`-delimited spans as `<b>` tags, run-length aware.
///
/// A span is 1–4 repeated asterisks, at least one non-newline content
/// character, then the same number of asterisks. For a run of length `n`,
/// one asterisk per side becomes the tag and the remaining `n - 1` leak
/// into the output as literal stars: `*a*` → `<b>a</b>`, `**a**` →
/// `<b>*a*</b>`. Matching is left-to-right and non-overlapping; longer
/// opener runs are tried first, content extends lazily.
fn bold_pass(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '*'
            && let Some((n, content_end)) = match_bold_span(&chars, i)
        {
            out.push_str("<b>");
            for _ in 1..n {
                out.push('*');
            }
            out.extend(&chars[i + n..content_end]);
            for _ in 1..n {
                out.push('*');
            }
            out.push_str("</b>");
            i = content_end + n;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Tries to match a bold span whose opener starts at `start`.
///
/// Returns `(n, content_end)` where `n` is the delimiter run length used
/// and `chars[start + n..content_end]` is the span content, followed by
/// `n` closing asterisks. Content may itself contain asterisks (shorter
/// openers leave the rest of the run inside the span) but never a newline.
fn match_bold_span(chars: &[char], start: usize) -> Option<(usize, usize)> {
    let run = chars[start..]
        .iter()
        .take_while(|&&c| c == '*')
        .count()
        .min(4);
    for n in (1..=run).rev() {
        let mut end = start + n + 1;
        while end + n <= chars.len() {
            if chars[end - 1] == '\n' {
                break;
            }
            if chars[end..end + n].iter().all(|&c| c == '*') {
                return Some((n, end));
            }
            end += 1;
        }
    }
    None
}

/// Replaces occurrences of `delim` pairwise with alternating open/close tags.
///
/// Occurrences are numbered left-to-right; the first of each consecutive
/// pair opens, the second closes. An unpaired trailing occurrence stays a
/// literal character, so every emitted tag is matched. Empty pairs (two
/// delimiters with nothing between them) collapse to nothing.
fn alternating_pass(text: &str, delim: char, open: &str, close: &str) -> String {
    let paired = text.matches(delim).count() / 2 * 2;
    let mut out = String::with_capacity(text.len());
    let mut seen = 0;
    for c in text.chars() {
        if c == delim && seen < paired {
            out.push_str(if seen % 2 == 0 { open } else { close });
            seen += 1;
        } else {
            out.push(c);
        }
    }
    let empty = format!("{open}{close}");
    out.replace(&empty, "")
}
