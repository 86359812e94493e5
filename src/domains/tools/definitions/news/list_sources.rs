//! List-sources tool definition.
//!
//! Pass-through to NewsAPI's `/top-headlines/sources` endpoint.

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

/// Parameters for the list-sources tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListSourcesParams {
    /// Filter by category.
    #[schemars(description = "Filter by category (e.g. 'business')")]
    #[serde(default)]
    pub category: Option<String>,

    /// Filter by 2-letter language code.
    #[schemars(description = "Filter by 2-letter language code (default: 'en')")]
    #[serde(default = "default_language")]
    pub language: String,

    /// Filter by 2-letter country code.
    #[schemars(description = "Filter by 2-letter country code")]
    #[serde(default)]
    pub country: Option<String>,
}

/// List-sources tool - available news sources.
pub struct ListSourcesTool;

impl ListSourcesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_sources";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List available news sources, optionally filtered by category, \
         language, and country. Returns the raw NewsAPI response.";

    /// Execute the tool logic.
    pub fn execute(params: &ListSourcesParams, config: &Config) -> Result<CallToolResult, NewsError> {
        info!("Listing news sources (category: {:?})", params.category);

        let client = NewsClient::from_config(&config.news)?;
        let body = client.get("top-headlines/sources", &Self::query(params))?;
        Ok(json_result(&body))
    }

    /// Map parameters onto the remote query string.
    pub fn query(params: &ListSourcesParams) -> Vec<(&'static str, String)> {
        build_query(vec![
            ("category", params.category.clone()),
            ("language", Some(params.language.clone())),
            ("country", params.country.clone()),
        ])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListSourcesParams>(),
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
                let params: ListSourcesParams =
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
    fn test_params_defaults() {
        let params: ListSourcesParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.language, "en");
        assert!(params.category.is_none());
        assert!(params.country.is_none());
    }

    #[test]
    fn test_query_omits_unset_optionals() {
        let params: ListSourcesParams = serde_json::from_str("{}").unwrap();
        let query = ListSourcesTool::query(&params);
        assert_eq!(query, vec![("language", "en".to_string())]);
    }

    #[test]
    fn test_missing_api_key_propagates() {
        let params: ListSourcesParams = serde_json::from_str("{}").unwrap();
        let result = ListSourcesTool::execute(&params, &Config::default());
        assert!(matches!(result, Err(NewsError::MissingApiKey)));
    }
}
