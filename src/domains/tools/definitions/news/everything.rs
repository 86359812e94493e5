//! Everything (full-text search) tool definition.
//!
//! Pass-through to NewsAPI's `/everything` endpoint.

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

use super::client::{NewsClient, NewsError, build_query};

fn default_language() -> String {
    "en".to_string()
}

fn default_sort_by() -> String {
    "relevancy".to_string()
}

fn default_page() -> u32 {
    1
}

/// Parameters for the everything tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EverythingParams {
    /// Search keywords (required).
    #[schemars(description = "Search keywords (required)")]
    pub query: String,

    /// Comma-separated source ids.
    #[schemars(description = "Comma-separated source ids")]
    #[serde(default)]
    pub sources: Option<String>,

    /// Restrict results to these domains (comma-separated).
    #[schemars(description = "Restrict results to these domains (comma-separated)")]
    #[serde(default)]
    pub domains: Option<String>,

    /// Earliest article date, YYYY-MM-DD.
    #[schemars(description = "Earliest article date, YYYY-MM-DD")]
    #[serde(default)]
    pub from_date: Option<String>,

    /// Latest article date, YYYY-MM-DD.
    #[schemars(description = "Latest article date, YYYY-MM-DD")]
    #[serde(default)]
    pub to_date: Option<String>,

    /// 2-letter language code.
    #[schemars(description = "2-letter language code (default: 'en')")]
    #[serde(default = "default_language")]
    pub language: String,

    /// Sort order: 'relevancy', 'popularity', or 'publishedAt'.
    #[schemars(description = "Sort order: 'relevancy', 'popularity', or 'publishedAt'")]
    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    /// Page number for pagination.
    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Everything tool - full-text article search.
pub struct EverythingTool;

impl EverythingTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "everything";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search all articles matching a query, optionally restricted by \
         sources, domains, and date range. Returns the raw NewsAPI response.";

    /// Execute the tool logic.
    pub fn execute(params: &EverythingParams, config: &Config) -> Result<CallToolResult, NewsError> {
        info!("Searching articles for '{}'", params.query);

        let client = NewsClient::from_config(&config.news)?;
        let body = client.get("everything", &Self::query(params))?;
        Ok(json_result(&body))
    }

    /// Map parameters onto the remote query string. Note the renames:
    /// `from_date` -> `from`, `to_date` -> `to`, `sort_by` -> `sortBy`.
    pub fn query(params: &EverythingParams) -> Vec<(&'static str, String)> {
        build_query(vec![
            ("q", Some(params.query.clone())),
            ("sources", params.sources.clone()),
            ("domains", params.domains.clone()),
            ("from", params.from_date.clone()),
            ("to", params.to_date.clone()),
            ("language", Some(params.language.clone())),
            ("sortBy", Some(params.sort_by.clone())),
            ("page", Some(params.page.to_string())),
        ])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<EverythingParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router. Failures propagate as protocol
    /// errors, not data.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: EverythingParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                tokio::task::spawn_blocking(move || Self::execute(&params, &config))
                    .await
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?
                    .map_err(|e| McpError::internal_error(e.to_string(), None))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_required() {
        let result: Result<EverythingParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_params_defaults() {
        let params: EverythingParams =
            serde_json::from_value(serde_json::json!({ "query": "rust" })).unwrap();
        assert_eq!(params.language, "en");
        assert_eq!(params.sort_by, "relevancy");
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_query_renames_date_and_sort_params() {
        let params: EverythingParams = serde_json::from_value(serde_json::json!({
            "query": "rust",
            "from_date": "2024-01-01",
            "to_date": "2024-02-01",
            "sort_by": "publishedAt"
        }))
        .unwrap();
        let query = EverythingTool::query(&params);
        assert!(query.contains(&("from", "2024-01-01".to_string())));
        assert!(query.contains(&("to", "2024-02-01".to_string())));
        assert!(query.contains(&("sortBy", "publishedAt".to_string())));
        let names: Vec<_> = query.iter().map(|(name, _)| *name).collect();
        assert!(!names.contains(&"from_date"));
        assert!(!names.contains(&"sources"));
    }
}
