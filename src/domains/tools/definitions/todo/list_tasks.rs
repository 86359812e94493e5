//! List-tasks tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

use crate::domains::tools::common::json_result;

use super::store::{StoreError, TaskStore};

/// Parameters for the list-tasks tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTasksParams {}

/// List-tasks tool - all tasks, newest first.
pub struct ListTasksTool;

impl ListTasksTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_tasks";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List all tasks in reverse chronological order (most recently added \
         first). Each task carries its Date, Time, Task, and Status fields.";

    /// Execute the tool logic.
    pub fn execute(store: &TaskStore) -> Result<CallToolResult, StoreError> {
        let tasks = store.list_newest_first()?;
        Ok(json_result(&tasks))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListTasksParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    pub fn create_route<S>(store: Arc<TaskStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let store = store.clone();
            async move {
                Self::execute(&store).map_err(|e| McpError::internal_error(e.to_string(), None))
            }
            .boxed()
        })
    }
}
