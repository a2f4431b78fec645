//! Text escaping for untrusted chart, question, and report strings.
//!
//! Two distinct contexts need escaping: markup interpolation
//! ([`escape_html`]) and attribute-selector lookups ([`escape_css_identifier`]).
//! Neither is a substitute for the other.

use std::fmt::{Display, Write};

/// Converts `value` to its string form and escapes `&`, `<`, `>`, `"` and `'`.
///
/// Single left-to-right pass: an entity produced for one character is never
/// re-escaped. Escaping twice therefore changes the string, so callers escape
/// exactly once per render.
pub fn escape_html(value: impl Display) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Serializes `ident` as a CSS identifier, following the CSSOM
/// "serialize an identifier" algorithm (what `CSS.escape` does in browsers).
///
/// Used when a question id has to appear inside an attribute selector such as
/// `input[name="…"]`.
pub fn escape_css_identifier(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len());

    for (index, &ch) in chars.iter().enumerate() {
        let code = u32::from(ch);
        let leading_digit = ch.is_ascii_digit()
            && (index == 0 || (index == 1 && chars[0] == '-'));

        if ch == '\0' {
            out.push('\u{FFFD}');
        } else if (0x01..=0x1F).contains(&code) || code == 0x7F || leading_digit {
            // `write!` into a `String` cannot fail.
            let _ = write!(out, "\\{code:x} ");
        } else if index == 0 && ch == '-' && chars.len() == 1 {
            out.push_str("\\-");
        } else if code >= 0x80 || ch == '-' || ch == '_' || ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else {
            out.push('\\');
            out.push(ch);
        }
    }
    out
}
