//! Minimal HTML page helpers
//!
//! Pages are small and static; markup is assembled with `format!` and every
//! interpolated value goes through [`escape`].

use axum::response::Html;

/// Escape text for use in element content and double-quoted attributes
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Wrap a body fragment in the shared document shell.
///
/// `title` is escaped; `body` is trusted markup.
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n<main>\n{}\n</main>\n</body>\n</html>\n",
        escape(title),
        body
    ))
}

/// Paragraph with a CSS class, or nothing when `text` is `None`
pub fn notice(class: &str, text: Option<&str>) -> String {
    text.map(|t| format!("<p class=\"{}\" role=\"alert\">{}</p>", escape(class), escape(t)))
        .unwrap_or_default()
}
