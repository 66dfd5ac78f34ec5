use async_trait::async_trait;
use dioxus::document::eval;

use services::{Clipboard, HandoffError};

/// Clipboard access through the webview's `navigator.clipboard`.
///
/// Must be used from inside a running Dioxus runtime.
pub struct WebviewClipboard;

#[async_trait(?Send)]
impl Clipboard for WebviewClipboard {
    async fn write_text(&self, text: &str) -> Result<(), HandoffError> {
        let script = write_text_script(text);
        let failure = eval(&script)
            .join::<String>()
            .await
            .map_err(|err| HandoffError::Rejected(err.to_string()))?;
        if failure.is_empty() {
            Ok(())
        } else {
            Err(HandoffError::Rejected(failure))
        }
    }
}

// Resolves to an empty string on success, the error text otherwise.
fn write_text_script(text: &str) -> String {
    let text_literal = js_string_literal(text);
    format!(
        r#"
        if (!navigator.clipboard || !navigator.clipboard.writeText) {{
            return "clipboard API unavailable";
        }}
        try {{
            await navigator.clipboard.writeText({text_literal});
            return "";
        }} catch (err) {{
            return String((err && err.message) || err || "clipboard write failed");
        }}
        "#
    )
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_escapes_report_lines() {
        let literal = js_string_literal("Студент: \"A\"\nГруппа: G1\\x");
        assert_eq!(literal, r#""Студент: \"A\"\nГруппа: G1\\x""#);
    }

    #[test]
    fn script_embeds_the_text_once() {
        let script = write_text_script("hello");
        assert_eq!(script.matches("\"hello\"").count(), 1);
        assert!(script.contains("navigator.clipboard.writeText"));
    }
}
