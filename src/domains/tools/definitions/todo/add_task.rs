//! Add-task tool definition.

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

use crate::domains::tools::common::text_result;

use super::store::{DEFAULT_STATUS, StoreError, TaskRecord, TaskStore};

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Parameters for the add-task tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddTaskParams {
    /// The task text.
    #[schemars(description = "The task text")]
    pub task: String,

    /// Initial status.
    #[schemars(description = "Initial status (default: 'Not Started')")]
    #[serde(default = "default_status")]
    pub status: String,
}

/// Add-task tool - append a new task to the list.
pub struct AddTaskTool;

impl AddTaskTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add_task";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Add a new task to the to-do list, stamped with the current date and \
         time. The new task becomes index 0 in the newest-first listing.";

    /// Execute the tool logic.
    pub fn execute(params: &AddTaskParams, store: &TaskStore) -> Result<CallToolResult, StoreError> {
        if params.task.is_empty() {
            return Ok(text_result("❌ Task cannot be empty."));
        }

        info!("Adding task '{}'", params.task);
        store.append(TaskRecord::stamped_now(&params.task, &params.status))?;

        Ok(text_result(format!(
            "✅ Task '{}' added successfully with status '{}'.",
            params.task, params.status
        )))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddTaskParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move {
                let params: AddTaskParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Self::execute(&params, &store)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::common::test_support::result_text;
    use tempfile::TempDir;

    fn params(task: &str) -> AddTaskParams {
        serde_json::from_value(serde_json::json!({ "task": task })).unwrap()
    }

    #[test]
    fn test_default_status() {
        let params = params("buy milk");
        assert_eq!(params.status, "Not Started");
    }

    #[test]
    fn test_add_task_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::open(dir.path().join("tasks.csv")).unwrap();

        let result = AddTaskTool::execute(&params("buy milk"), &store).unwrap();
        assert_eq!(
            result_text(&result),
            "✅ Task 'buy milk' added successfully with status 'Not Started'."
        );

        let tasks = store.list_newest_first().unwrap();
        assert_eq!(tasks[0].task, "buy milk");
        assert_eq!(tasks[0].status, "Not Started");
    }

    #[test]
    fn test_empty_task_rejected() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::open(dir.path().join("tasks.csv")).unwrap();

        let result = AddTaskTool::execute(&params(""), &store).unwrap();
        assert_eq!(result_text(&result), "❌ Task cannot be empty.");
        assert!(store.list_newest_first().unwrap().is_empty());
    }

    #[test]
    fn test_custom_status() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::open(dir.path().join("tasks.csv")).unwrap();

        let params: AddTaskParams = serde_json::from_value(serde_json::json!({
            "task": "write report",
            "status": "In Progress"
        }))
        .unwrap();
        AddTaskTool::execute(&params, &store).unwrap();

        assert_eq!(store.list_newest_first().unwrap()[0].status, "In Progress");
    }
}
