//! Shared helpers for tool definitions.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Wrap a serializable envelope as a successful tool result.
///
/// The envelope is rendered as pretty JSON in the text content so both
/// humans and hosts can read it.
pub fn envelope_result<T: Serialize>(envelope: &T) -> CallToolResult {
    match serde_json::to_string_pretty(envelope) {
        Ok(json) => CallToolResult::success(vec![Content::text(json)]),
        Err(e) => error_result(&format!("Failed to serialize tool result: {}", e)),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Truncate free-form input for diagnostic log lines.
pub fn log_preview(text: &str) -> String {
    const MAX_CHARS: usize = 50;

    if text.chars().count() > MAX_CHARS {
        let prefix: String = text.chars().take(MAX_CHARS).collect();
        format!("{}...", prefix)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_envelope_result_is_pretty_json() {
        #[derive(Serialize)]
        struct Envelope {
            success: bool,
        }

        let result = envelope_result(&Envelope { success: true });
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed["success"], serde_json::json!(true));
    }

    #[test]
    fn test_error_result_flags_error() {
        let result = error_result("boom");
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_log_preview_truncates_long_input() {
        let long = "q".repeat(80);
        let preview = log_preview(&long);
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_log_preview_keeps_short_input() {
        assert_eq!(log_preview("short"), "short");
        assert_eq!(log_preview(""), "");
    }

    #[test]
    fn test_log_preview_respects_char_boundaries() {
        let wide = "🔮".repeat(60);
        let preview = log_preview(&wide);
        assert!(preview.ends_with("..."));
    }
}
