//! Top-headlines tool definition.
//!
//! Pass-through to NewsAPI's `/top-headlines` endpoint.

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

fn default_country() -> String {
    "us".to_string()
}

fn default_page() -> u32 {
    1
}

/// Parameters for the top-headlines tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TopHeadlinesParams {
    /// Search keywords.
    #[schemars(description = "Search keywords")]
    #[serde(default)]
    pub query: Option<String>,

    /// Comma-separated source ids (e.g. 'bbc-news,the-verge').
    #[schemars(description = "Comma-separated source ids (e.g. 'bbc-news,the-verge')")]
    #[serde(default)]
    pub sources: Option<String>,

    /// News category (e.g. 'business', 'technology').
    #[schemars(description = "News category (e.g. 'business', 'technology')")]
    #[serde(default)]
    pub category: Option<String>,

    /// 2-letter language code.
    #[schemars(description = "2-letter language code (default: 'en')")]
    #[serde(default = "default_language")]
    pub language: String,

    /// 2-letter country code.
    #[schemars(description = "2-letter country code (default: 'us')")]
    #[serde(default = "default_country")]
    pub country: String,

    /// Page number for pagination.
    #[schemars(description = "Page number (default: 1)")]
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Top-headlines tool - latest headlines, optionally filtered.
pub struct TopHeadlinesTool;

impl TopHeadlinesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "top_headlines";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the latest top headlines, optionally filtered by keywords, \
         sources, category, language, and country. Returns the raw NewsAPI \
         response.";

    /// Execute the tool logic.
    pub fn execute(params: &TopHeadlinesParams, config: &Config) -> Result<CallToolResult, NewsError> {
        info!("Fetching top headlines (query: {:?})", params.query);

        let client = NewsClient::from_config(&config.news)?;
        let body = client.get("top-headlines", &Self::query(params))?;
        Ok(json_result(&body))
    }

    /// Map parameters onto the remote query string.
    pub fn query(params: &TopHeadlinesParams) -> Vec<(&'static str, String)> {
        build_query(vec![
            ("q", params.query.clone()),
            ("sources", params.sources.clone()),
            ("category", params.category.clone()),
            ("language", Some(params.language.clone())),
            ("country", Some(params.country.clone())),
            ("page", Some(params.page.to_string())),
        ])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TopHeadlinesParams>(),
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
                let params: TopHeadlinesParams =
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
