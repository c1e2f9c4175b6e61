//! Markup escaping for transcript text.
//!
//! Every message body is escaped before it reaches the rendering surface, so
//! user or server text can never be parsed as markup.

#[cfg(test)]
#[path = "escape_test.rs"]
mod escape_test;

/// Replace the five markup-significant characters with their entity forms.
///
/// All other characters pass through unchanged.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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
