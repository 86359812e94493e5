//! Word meaning tool definition.
//!
//! Returns the short definitions of a word: the first entry carrying a
//! short-definition list wins, scanning across all entries.

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

/// Parameters for the meaning tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MeaningParams {
    /// The word to look up.
    #[schemars(description = "The word to look up")]
    pub word: String,
}

/// Meaning tool - short definitions for a word.
pub struct MeaningTool;

impl MeaningTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "meaning";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Return the list of short definitions for a word. Yields a single \
         'No definitions found.' element for unknown words and an 'Error:' \
         element on lookup failure.";

    /// Execute the tool logic.
    pub fn execute(params: &MeaningParams, config: &Config) -> CallToolResult {
        info!("Looking up meaning of '{}'", params.word);

        let payload = match DictionaryClient::from_config(&config.dictionary) {
            Ok(client) => Self::lookup(&client, &params.word),
            Err(e) => vec![format!("Error: {}", e)],
        };
        json_result(&payload)
    }

    /// Resolve the definitions for a word via the given lookup.
    pub fn lookup(client: &impl Lookup, word: &str) -> Vec<String> {
        match client.fetch(word) {
            Ok(entries) => first_with(&entries, |e| e.short_defs.clone())
                .unwrap_or_else(|| vec!["No definitions found.".to_string()]),
            Err(e) => vec![format!("Error: {}", e)],
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<MeaningParams>(),
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
                let params: MeaningParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // Blocking HTTP belongs on the blocking pool.
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
