//! Markup helpers for text that ends up in `innerHTML`.

use crate::fold::{fold, Folded};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes `text` and wraps every case-insensitive occurrence of `query` in
/// `<strong>`. The query is matched literally.
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return escape(text);
    }
    let needle = fold(query);

    let mut out = String::with_capacity(text.len() + 32);
    let mut last = 0;
    for range in Folded::new(text).find_all(&needle) {
        out.push_str(&escape(&text[last..range.start]));
        out.push_str("<strong>");
        out.push_str(&escape(&text[range.clone()]));
        out.push_str("</strong>");
        last = range.end;
    }
    out.push_str(&escape(&text[last..]));
    out
}
