//! Pronunciations tool definition.
//!
//! Returns the written pronunciations of the first structured entry,
//! deduplicated.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::tools::common::json_result;

use super::client::{DictionaryClient, Lookup};
use super::entry::first_structured;

/// Parameters for the pronunciations tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PronunciationsParams {
    /// The word to look up.
    #[schemars(description = "The word to look up")]
    pub word: String,
}

/// Pronunciations tool - written pronunciation strings (no audio).
pub struct PronunciationsTool;

impl PronunciationsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "pronunciations";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Return the written pronunciation strings for a word, deduplicated. \
         Yields ['Not found'] for unknown words and an 'Error:' element on \
         lookup failure.";

    /// Execute the tool logic.
    pub fn execute(params: &PronunciationsParams, config: &Config) -> CallToolResult {
        info!("Looking up pronunciations of '{}'", params.word);

        let payload = match DictionaryClient::from_config(&config.dictionary) {
            Ok(client) => Self::lookup(&client, &params.word),
            Err(e) => vec![format!("Error: {}", e)],
        };
        json_result(&payload)
    }

    /// Resolve the pronunciations for a word via the given lookup.
    pub fn lookup(client: &impl Lookup, word: &str) -> Vec<String> {
        match client.fetch(word) {
            Ok(entries) => match first_structured(&entries) {
                Some(data) => data.pronunciations(),
                None => vec!["Not found".to_string()],
            },
            Err(e) => vec![format!("Error: {}", e)],
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PronunciationsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: PronunciationsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let result =
                    tokio::task::spawn_blocking(move || Self::execute(&params, &config))
                        .await
                        .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(result)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::test_support::FixtureLookup;
    use super::super::entry::fixtures;
    use super::*;

    #[test]
    fn test_pronunciations_deduplicated() {
        let client = FixtureLookup::new().with("test", fixtures::WORD_WITH_EVERYTHING);
        let prs = PronunciationsTool::lookup(&client, "test");
        // Fixture repeats the same written form twice
        assert_eq!(prs, vec!["ˈtest"]);
    }

    #[test]
    fn test_pronunciations_first_structured_entry_only() {
        let client = FixtureLookup::new().with("bare", fixtures::LATE_FIELDS);
        assert_eq!(PronunciationsTool::lookup(&client, "bare"), vec!["ˈber"]);
    }

    #[test]
    fn test_pronunciations_unknown_word() {
        let client = FixtureLookup::new().with("xyzzy", fixtures::SUGGESTIONS_ONLY);
        assert_eq!(PronunciationsTool::lookup(&client, "xyzzy"), vec!["Not found"]);
    }

    #[test]
    fn test_pronunciations_fetch_failure_sentinel() {
        let client = FixtureLookup::new();
        let prs = PronunciationsTool::lookup(&client, "test");
        assert!(prs[0].starts_with("Error: "));
    }
}
