//! Shared result helpers for tool implementations.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Create a success result whose content is the JSON rendering of `payload`.
///
/// The dictionary tools use this for sentinel error values too: their
/// failures are data, not protocol faults.
pub fn json_result<T: Serialize>(payload: &T) -> CallToolResult {
    match serde_json::to_string_pretty(payload) {
        Ok(json) => CallToolResult::success(vec![Content::text(json)]),
        Err(e) => {
            warn!("Failed to serialize tool result: {}", e);
            CallToolResult::error(vec![Content::text(format!(
                "Failed to serialize tool result: {}",
                e
            ))])
        }
    }
}

/// Create a success result with plain text content.
pub fn text_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}


#[cfg(test)]
mod tests {
    use super::test_support::{result_json, result_text};
    use super::*;

    #[test]
    fn test_json_result_round_trips() {
        let payload = vec!["a".to_string(), "b".to_string()];
        let result = json_result(&payload);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(result_json(&result), serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_text_result() {
        let result = text_result("done");
        assert_eq!(result_text(&result), "done");
    }
}
