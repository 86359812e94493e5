//! Full-info tool definition.
//!
//! Composes meanings, part of speech, pronunciations, stems, and per-stem
//! details behind boolean switches. Unlike the single-field tools, this one
//! inspects ONLY the first structured entry (it never scans further entries
//! to fill a missing field), and its per-stem scan stops as soon as meanings
//! are filled. Both asymmetries are long-standing observable behavior and
//! are kept.

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
use super::entry::{Entry, first_structured};

fn default_true() -> bool {
    true
}

/// Parameters for the full-info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FullInfoParams {
    /// The word to look up.
    #[schemars(description = "The word to look up")]
    pub word: String,

    /// Include short definitions.
    #[schemars(description = "Include short definitions (default: true)")]
    #[serde(default = "default_true")]
    pub include_meanings: bool,

    /// Include the part of speech.
    #[schemars(description = "Include the part of speech (default: true)")]
    #[serde(default = "default_true")]
    pub include_part_of_speech: bool,

    /// Include written pronunciations.
    #[schemars(description = "Include written pronunciations (default: true)")]
    #[serde(default = "default_true")]
    pub include_pronunciations: bool,

    /// Include the stem list.
    #[schemars(description = "Include the stem list (default: true)")]
    #[serde(default = "default_true")]
    pub include_stems: bool,

    /// Include per-stem details.
    #[schemars(description = "Include per-stem details (default: true)")]
    #[serde(default = "default_true")]
    pub include_stem_info: bool,
}

/// Composed dictionary info for a word. Excluded sections are absent from
/// the output; included sections default to empty when the first entry
/// lacks them.
#[derive(Debug, Serialize, PartialEq)]
pub struct FullInfo {
    pub word: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meanings: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciations: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stems: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_info: Option<BTreeMap<String, FullStemEntry>>,
}

/// Per-stem details inside `full_info`. All three fields are always
/// present, empty when missing, unlike `stem_info`'s omit-when-absent shape.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FullStemEntry {
    Details {
        meanings: Vec<String>,
        part_of_speech: String,
        pronunciations: Vec<String>,
    },
    Error {
        error: String,
    },
}

/// Result payload: the composed info, or a top-level error.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FullInfoResult {
    Info(FullInfo),
    Error { error: String },
}

/// Full-info tool - customizable dictionary info including stem details.
pub struct FullInfoTool;

impl FullInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "full_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Return customizable dictionary info for a word: meanings, part of \
         speech, pronunciations, stems, and per-stem details, each behind a \
         boolean switch. Only the word's first dictionary entry is consulted.";

    /// Execute the tool logic.
    pub fn execute(params: &FullInfoParams, config: &Config) -> CallToolResult {
        info!("Looking up full info of '{}'", params.word);

        let payload = match DictionaryClient::from_config(&config.dictionary) {
            Ok(client) => Self::lookup(&client, params),
            Err(e) => FullInfoResult::Error {
                error: format!("Request failed: {}", e),
            },
        };
        json_result(&payload)
    }

    /// Compose the requested sections from the first structured entry.
    pub fn lookup(client: &impl Lookup, params: &FullInfoParams) -> FullInfoResult {
        let entries = match client.fetch(&params.word) {
            Ok(entries) => entries,
            Err(e) => {
                return FullInfoResult::Error {
                    error: format!("Request failed: {}", e),
                };
            }
        };

        let Some(data) = first_structured(&entries) else {
            return FullInfoResult::Error {
                error: "No valid dictionary entry found".to_string(),
            };
        };

        let mut info = FullInfo {
            word: params.word.clone(),
            meanings: None,
            part_of_speech: None,
            pronunciations: None,
            stems: None,
            stem_info: None,
        };

        if params.include_meanings {
            info.meanings = Some(data.short_defs.clone().unwrap_or_default());
        }

        if params.include_part_of_speech {
            info.part_of_speech = Some(data.functional_label.clone().unwrap_or_default());
        }

        if params.include_pronunciations {
            info.pronunciations = Some(data.pronunciations());
        }

        let stems = if params.include_stems || params.include_stem_info {
            data.stems()
        } else {
            Vec::new()
        };

        if params.include_stems {
            info.stems = Some(stems.clone());
        }

        if params.include_stem_info {
            let mut stem_info = BTreeMap::new();
            for stem in &stems {
                let entry = match client.fetch(stem) {
                    Ok(stem_entries) => Self::collect_stem_entry(&stem_entries),
                    Err(e) => {
                        warn!("Failed to fetch stem '{}': {}", stem, e);
                        FullStemEntry::Error {
                            error: format!("Failed to fetch: {}", e),
                        }
                    }
                };
                stem_info.insert(stem.clone(), entry);
            }
            info.stem_info = Some(stem_info);
        }

        FullInfoResult::Info(info)
    }

    /// Fill a stem entry from its entries; the scan stops as soon as
    /// meanings are filled.
    fn collect_stem_entry(entries: &[Entry]) -> FullStemEntry {
        let mut meanings = Vec::new();
        let mut part_of_speech = String::new();
        let mut pronunciations = Vec::new();

        for entry in entries {
            let Some(data) = entry.as_structured() else {
                continue;
            };

            if meanings.is_empty() {
                if let Some(defs) = &data.short_defs {
                    meanings = defs.clone();
                }
            }

            if part_of_speech.is_empty() {
                if let Some(label) = &data.functional_label {
                    part_of_speech = label.clone();
                }
            }

            if pronunciations.is_empty() && data.headword.is_some() {
                pronunciations = data.pronunciations();
            }

            if !meanings.is_empty() {
                break;
            }
        }

        FullStemEntry::Details {
            meanings,
            part_of_speech,
            pronunciations,
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FullInfoParams>(),
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
                let params: FullInfoParams =
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
