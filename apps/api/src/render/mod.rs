// Presentation: HTML cards and page for the browser, plain-text transcript for download.
// Everything here is re-derived from session state on every render.

pub mod cards;
pub mod page;
pub mod transcript;

/// Escapes text for insertion into HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
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
