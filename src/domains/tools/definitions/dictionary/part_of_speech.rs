//! Part-of-speech tool definition.
//!
//! Returns the functional label of a word: the first entry carrying one
//! wins, scanning across all entries. Note the asymmetry with `full_info`,
//! which only consults the first structured entry.

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
use super::entry::first_with;

/// Parameters for the part-of-speech tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PartOfSpeechParams {
    /// The word to look up.
    #[schemars(description = "The word to look up")]
    pub word: String,
}

/// Part-of-speech tool - functional label for a word.
pub struct PartOfSpeechTool;

impl PartOfSpeechTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "part_of_speech";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Return the part of speech for a word (e.g. 'noun', 'verb'). Yields \
         'Not found' for unknown words and an 'Error:' string on lookup failure.";

    /// Execute the tool logic.
    pub fn execute(params: &PartOfSpeechParams, config: &Config) -> CallToolResult {
        info!("Looking up part of speech of '{}'", params.word);

        let payload = match DictionaryClient::from_config(&config.dictionary) {
            Ok(client) => Self::lookup(&client, &params.word),
            Err(e) => format!("Error: {}", e),
        };
        json_result(&payload)
    }

    /// Resolve the part of speech for a word via the given lookup.
    pub fn lookup(client: &impl Lookup, word: &str) -> String {
        match client.fetch(word) {
            Ok(entries) => first_with(&entries, |e| e.functional_label.clone())
                .unwrap_or_else(|| "Not found".to_string()),
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PartOfSpeechParams>(),
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
                let params: PartOfSpeechParams =
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
