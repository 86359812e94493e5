//! Meanings-of-stems tool definition.
//!
//! Fetches the origin word for its stem list, then issues one extra lookup
//! per stem. A failed stem lookup becomes a per-stem sentinel and does not
//! abort the rest; a failed origin lookup aborts the whole operation.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::config::Config;
use crate::domains::tools::common::json_result;

use super::client::{DictionaryClient, Lookup};
use super::entry::{first_structured, first_with};

/// Parameters for the meanings-of-stems tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MeaningsOfStemsParams {
    /// The word whose stems to look up.
    #[schemars(description = "The word whose stems to look up")]
    pub word: String,
}

/// Result payload: one meanings list per resolvable stem, or a top-level
/// error when the origin word itself cannot be fetched.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum StemMeanings {
    Meanings(BTreeMap<String, Vec<String>>),
    Error { error: String },
}

/// Meanings-of-stems tool - definitions for each related word form.
pub struct MeaningsOfStemsTool;

impl MeaningsOfStemsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "meanings_of_stems";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Return the short definitions of each stem (related word form) of a \
         word. Each stem is looked up separately; a stem that cannot be \
         fetched maps to a 'Could not fetch:' element.";

    /// Execute the tool logic.
    pub fn execute(params: &MeaningsOfStemsParams, config: &Config) -> CallToolResult {
        info!("Looking up stem meanings of '{}'", params.word);

        let payload = match DictionaryClient::from_config(&config.dictionary) {
            Ok(client) => Self::lookup(&client, &params.word),
            Err(e) => StemMeanings::Error {
                error: format!("Failed to fetch stems: {}", e),
            },
        };
        json_result(&payload)
    }

    /// Resolve the meanings of each stem of a word via the given lookup.
    pub fn lookup(client: &impl Lookup, word: &str) -> StemMeanings {
        let entries = match client.fetch(word) {
            Ok(entries) => entries,
            Err(e) => {
                return StemMeanings::Error {
                    error: format!("Failed to fetch stems: {}", e),
                };
            }
        };

        let stems = first_structured(&entries)
            .map(|data| data.stems())
            .unwrap_or_default();

        let mut meanings = BTreeMap::new();
        for stem in stems {
            match client.fetch(&stem) {
                Ok(stem_entries) => {
                    // Stems without any short definition are omitted.
                    if let Some(defs) = first_with(&stem_entries, |e| e.short_defs.clone()) {
                        meanings.insert(stem, defs);
                    }
                }
                Err(e) => {
                    warn!("Failed to fetch stem '{}': {}", stem, e);
                    meanings.insert(stem, vec![format!("Could not fetch: {}", e)]);
                }
            }
        }

        StemMeanings::Meanings(meanings)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<MeaningsOfStemsParams>(),
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
                let params: MeaningsOfStemsParams =
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

    const STEM_RESPONSE: &str = r#"[{"shortdef": ["a stem definition"]}]"#;

    #[test]
    fn test_meanings_of_stems_fans_out() {
        let client = FixtureLookup::new()
            .with("test", fixtures::WORD_WITH_EVERYTHING)
            .with("test", fixtures::WORD_WITH_EVERYTHING)
            .with("tests", STEM_RESPONSE)
            .with("tested", STEM_RESPONSE)
            .with("testing", STEM_RESPONSE);

        let StemMeanings::Meanings(map) = MeaningsOfStemsTool::lookup(&client, "test") else {
            panic!("expected meanings map");
        };

        assert_eq!(map["tests"], vec!["a stem definition"]);
        assert_eq!(map["tested"], vec!["a stem definition"]);
        // "test" itself resolves through its own entry
        assert_eq!(map["test"][0], "a means of testing");
    }

    #[test]
    fn test_per_stem_failure_does_not_abort() {
        // Only the origin word and one stem are resolvable
        let client = FixtureLookup::new()
            .with("test", fixtures::WORD_WITH_EVERYTHING)
            .with("tests", STEM_RESPONSE);

        let StemMeanings::Meanings(map) = MeaningsOfStemsTool::lookup(&client, "test") else {
            panic!("expected meanings map");
        };

        assert_eq!(map["tests"], vec!["a stem definition"]);
        assert!(map["tested"][0].starts_with("Could not fetch: "));
        assert!(map["testing"][0].starts_with("Could not fetch: "));
    }

    #[test]
    fn test_origin_failure_aborts() {
        let client = FixtureLookup::new();
        let result = MeaningsOfStemsTool::lookup(&client, "test");
        let StemMeanings::Error { error } = result else {
            panic!("expected top-level error");
        };
        assert!(error.starts_with("Failed to fetch stems: "));
    }

    #[test]
    fn test_unknown_word_yields_empty_map() {
        let client = FixtureLookup::new().with("xyzzy", fixtures::SUGGESTIONS_ONLY);
        assert_eq!(
            MeaningsOfStemsTool::lookup(&client, "xyzzy"),
            StemMeanings::Meanings(BTreeMap::new())
        );
    }
}
