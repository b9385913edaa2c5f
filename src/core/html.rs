// src/core/html.rs
//
// Tiny builders for the static report. Everything that is text goes through
// `escape`; attributes are written by the caller.

use std::fmt::Write;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<tag>text</tag>` with `text` escaped.
pub fn text_el(out: &mut String, tag: &str, text: &str) {
    let _ = write!(out, "<{tag}>{}</{tag}>", escape(text));
}

/// `<td>` that turns red when `alert` is set.
pub fn td_flag(out: &mut String, text: &str, alert: bool) {
    if alert {
        let _ = write!(out, r#"<td style="color:red">{}</td>"#, escape(text));
    } else {
        text_el(out, "td", text);
    }
}

/// Red when `alert`, green otherwise.
pub fn span_status(out: &mut String, text: &str, alert: bool) {
    let color = if alert { "red" } else { "green" };
    let _ = write!(out, r#"<span style="color:{color}">{}</span>"#, escape(text));
}

/// Small "(i)" marker carrying the disclosure form question as a tooltip.
pub fn hint(out: &mut String, title: &str) {
    let _ = write!(out, r#" <span title="{}">(i)</span>"#, escape(title));
}
