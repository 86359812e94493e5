//! Stem-info tool definition.
//!
//! For each stem of a word, collects the requested subset of fields
//! (meanings, part of speech, pronunciations). Each stem's entries are
//! scanned first-match-wins per field, and the scan stops early once every
//! requested field is filled.

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

/// Parameters for the stem-info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StemInfoParams {
    /// The word whose stems to look up.
    #[schemars(description = "The word whose stems to look up")]
    pub word: String,

    /// Include short definitions per stem.
    #[schemars(description = "Include short definitions per stem (default: true)")]
    #[serde(default = "default_true")]
    pub include_meanings: bool,

    /// Include the part of speech per stem.
    #[schemars(description = "Include the part of speech per stem (default: true)")]
    #[serde(default = "default_true")]
    pub include_part_of_speech: bool,

    /// Include written pronunciations per stem.
    #[schemars(description = "Include written pronunciations per stem (default: true)")]
    #[serde(default = "default_true")]
    pub include_pronunciations: bool,
}

impl StemInfoParams {
    fn flags(&self) -> IncludeFlags {
        IncludeFlags {
            meanings: self.include_meanings,
            part_of_speech: self.include_part_of_speech,
            pronunciations: self.include_pronunciations,
        }
    }
}

/// Which fields to collect per stem.
#[derive(Debug, Clone, Copy)]
pub struct IncludeFlags {
    pub meanings: bool,
    pub part_of_speech: bool,
    pub pronunciations: bool,
}

/// Collected fields for a single stem. Omitted fields are absent from the
/// serialized output; a failed fetch carries only `error`.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct StemDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meanings: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciations: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StemDetails {
    fn fetch_error(e: impl std::fmt::Display) -> Self {
        Self {
            error: Some(format!("Failed to fetch: {}", e)),
            ..Default::default()
        }
    }

    fn satisfies(&self, include: IncludeFlags) -> bool {
        (!include.meanings || self.meanings.is_some())
            && (!include.part_of_speech || self.part_of_speech.is_some())
            && (!include.pronunciations || self.pronunciations.is_some())
    }
}

/// Result payload: one details record per stem, or a top-level error when
/// the origin word cannot be processed.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum StemInfo {
    Stems(BTreeMap<String, StemDetails>),
    Error { error: String },
}

/// Stem-info tool - configurable field collection per stem.
pub struct StemInfoTool;

impl StemInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "stem_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Return meanings, part of speech, and pronunciations for each stem \
         (related word form) of a word. Boolean switches control which fields \
         are collected. A stem that cannot be fetched maps to an error record.";

    /// Execute the tool logic.
    pub fn execute(params: &StemInfoParams, config: &Config) -> CallToolResult {
        info!("Looking up stem info of '{}'", params.word);

        let payload = match DictionaryClient::from_config(&config.dictionary) {
            Ok(client) => Self::lookup(&client, &params.word, params.flags()),
            Err(e) => StemInfo::Error {
                error: format!("Failed to process stems for '{}': {}", params.word, e),
            },
        };
        json_result(&payload)
    }

    /// Resolve the requested fields for each stem of a word.
    pub fn lookup(client: &impl Lookup, word: &str, include: IncludeFlags) -> StemInfo {
        let entries = match client.fetch(word) {
            Ok(entries) => entries,
            Err(e) => {
                return StemInfo::Error {
                    error: format!("Failed to process stems for '{}': {}", word, e),
                };
            }
        };

        let stems = first_structured(&entries)
            .map(|data| data.stems())
            .unwrap_or_default();

        let mut result = BTreeMap::new();
        for stem in stems {
            let details = match client.fetch(&stem) {
                Ok(stem_entries) => Self::collect_details(&stem_entries, include),
                Err(e) => {
                    warn!("Failed to fetch stem '{}': {}", stem, e);
                    StemDetails::fetch_error(e)
                }
            };
            result.insert(stem, details);
        }

        StemInfo::Stems(result)
    }

    /// Scan a stem's entries, filling each requested field first-match-wins.
    /// An empty value does not lock its field: a later entry may replace it.
    /// The scan stops once every requested field is present, empty or not.
    pub fn collect_details(entries: &[Entry], include: IncludeFlags) -> StemDetails {
        let mut details = StemDetails::default();

        for entry in entries {
            let Some(data) = entry.as_structured() else {
                continue;
            };

            if include.meanings && details.meanings.as_ref().is_none_or(|m| m.is_empty()) {
                if let Some(defs) = &data.short_defs {
                    details.meanings = Some(defs.clone());
                }
            }

            if include.part_of_speech
                && details.part_of_speech.as_ref().is_none_or(|p| p.is_empty())
            {
                if let Some(label) = &data.functional_label {
                    details.part_of_speech = Some(label.clone());
                }
            }

            if include.pronunciations
                && details.pronunciations.as_ref().is_none_or(|p| p.is_empty())
                && data.headword.is_some()
            {
                details.pronunciations = Some(data.pronunciations());
            }

            if details.satisfies(include) {
                break;
            }
        }

        details
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<StemInfoParams>(),
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
                let params: StemInfoParams =
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

    const ALL: IncludeFlags = IncludeFlags {
        meanings: true,
        part_of_speech: true,
        pronunciations: true,
    };

    const STEM_RESPONSE: &str = r#"[
        {"fl": "noun", "hwi": {"prs": [{"mw": "ˈstem"}]}, "shortdef": ["a stem definition"]}
    ]"#;

    #[test]
    fn test_default_include_flags() {
        let json = r#"{"word": "test"}"#;
        let params: StemInfoParams = serde_json::from_str(json).unwrap();
        assert!(params.include_meanings);
        assert!(params.include_part_of_speech);
        assert!(params.include_pronunciations);
    }

    #[test]
    fn test_one_record_per_stem() {
        let client = FixtureLookup::new()
            .with("test", fixtures::WORD_WITH_EVERYTHING)
            .with("tests", STEM_RESPONSE);

        let StemInfo::Stems(map) = StemInfoTool::lookup(&client, "test", ALL) else {
            panic!("expected stems map");
        };

        // Exactly one record per stem of the origin word, failures included
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec!["test", "tested", "testing", "tests"]
        );
        assert_eq!(map["tests"].meanings.as_deref(), Some(&["a stem definition".to_string()][..]));
        assert!(map["tested"].error.as_deref().unwrap().starts_with("Failed to fetch: "));
    }

    #[test]
    fn test_collect_details_fills_across_entries() {
        // fl only appears in the second entry; the scan keeps going
        let entries = fixtures::parse(fixtures::LATE_FIELDS);
        let details = StemInfoTool::collect_details(&entries, ALL);
        assert_eq!(details.part_of_speech.as_deref(), Some("adjective"));
        assert_eq!(details.pronunciations.as_deref(), Some(&["ˈber".to_string()][..]));
        assert!(details.meanings.is_some());
    }

    #[test]
    fn test_collect_details_refills_empty_meanings() {
        // An empty shortdef does not lock the field; the later entry's
        // non-empty list replaces it.
        let entries: Vec<Entry> = serde_json::from_str(
            r#"[{"shortdef": []}, {"fl": "noun", "shortdef": ["a later definition"]}]"#,
        )
        .unwrap();
        let details = StemInfoTool::collect_details(&entries, ALL);
        assert_eq!(
            details.meanings.as_deref(),
            Some(&["a later definition".to_string()][..])
        );
        assert_eq!(details.part_of_speech.as_deref(), Some("noun"));
    }

    #[test]
    fn test_collect_details_stops_on_presence_even_when_empty() {
        // All three fields are present (empty) after the first entry, so
        // the scan stops before the later entry's real values.
        let entries: Vec<Entry> = serde_json::from_str(
            r#"[
                {"shortdef": [], "fl": "", "hwi": {}},
                {"shortdef": ["a later definition"], "fl": "noun"}
            ]"#,
        )
        .unwrap();
        let details = StemInfoTool::collect_details(&entries, ALL);
        assert_eq!(details.meanings.as_deref(), Some(&[][..]));
        assert_eq!(details.part_of_speech.as_deref(), Some(""));
        assert_eq!(details.pronunciations.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_collect_details_respects_flags() {
        let entries = fixtures::parse(fixtures::WORD_WITH_EVERYTHING);
        let details = StemInfoTool::collect_details(
            &entries,
            IncludeFlags {
                meanings: true,
                part_of_speech: false,
                pronunciations: false,
            },
        );
        assert!(details.meanings.is_some());
        assert!(details.part_of_speech.is_none());
        assert!(details.pronunciations.is_none());
    }

    #[test]
    fn test_excluded_fields_absent_from_json() {
        let details = StemDetails {
            meanings: Some(vec!["a def".to_string()]),
            ..Default::default()
        };
        let json = serde_json::to_value(&details).unwrap();
        assert!(json.get("part_of_speech").is_none());
        assert!(json.get("pronunciations").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_origin_failure_aborts() {
        let client = FixtureLookup::new();
        let StemInfo::Error { error } = StemInfoTool::lookup(&client, "test", ALL) else {
            panic!("expected top-level error");
        };
        assert!(error.starts_with("Failed to process stems for 'test': "));
    }
}
