//! Modify-task tool definition.
//!
//! Overwrites only the status of the task at a newest-first display index.

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

use super::store::{StoreError, TaskStore, UpdateOutcome};

/// Parameters for the modify-task tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ModifyTaskParams {
    /// Zero-based index in newest-first order (newest task = 0).
    #[schemars(description = "Zero-based index in newest-first order (newest task = 0)")]
    pub index: i64,

    /// The new status.
    #[schemars(description = "The new status")]
    pub new_status: String,
}

/// Modify-task tool - change the status of a task by index.
pub struct ModifyTaskTool;

impl ModifyTaskTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "modify_task";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Modify the status of a task by its index (0-based, newest task = 0). \
         Only the status field changes; everything else is left as-is.";

    /// Execute the tool logic.
    pub fn execute(
        params: &ModifyTaskParams,
        store: &TaskStore,
    ) -> Result<CallToolResult, StoreError> {
        info!("Modifying task {} to '{}'", params.index, params.new_status);

        let message = match store.set_status(params.index, &params.new_status)? {
            UpdateOutcome::Applied(record) => format!(
                "✅ Task '{}' updated to '{}'.",
                record.task, params.new_status
            ),
            UpdateOutcome::Empty => "❌ No tasks found.".to_string(),
            UpdateOutcome::OutOfRange { index, count } => format!(
                "❌ Invalid index {}. Valid range: 0 to {}.",
                index,
                count - 1
            ),
        };

        Ok(text_result(message))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ModifyTaskParams>(),
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
                let params: ModifyTaskParams =
                    serde_json::from_value(serde_json::Value::Object(args))
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
    use super::super::store::TaskRecord;
    use super::*;
    use crate::domains::tools::common::test_support::result_text;
    use tempfile::TempDir;

    fn params(index: i64, new_status: &str) -> ModifyTaskParams {
        ModifyTaskParams {
            index,
            new_status: new_status.to_string(),
        }
    }

    fn seeded_store(dir: &TempDir, tasks: &[&str]) -> TaskStore {
        let store = TaskStore::open(dir.path().join("tasks.csv")).unwrap();
        for task in tasks {
            store
                .append(TaskRecord::stamped_now(*task, "Not Started"))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_modify_index_zero_is_most_recent() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &["A", "B", "C"]);

        let result = ModifyTaskTool::execute(&params(0, "Done"), &store).unwrap();
        assert_eq!(result_text(&result), "✅ Task 'C' updated to 'Done'.");

        let tasks = store.list_newest_first().unwrap();
        assert_eq!(tasks[0].status, "Done");
        assert_eq!(tasks[1].status, "Not Started");
        assert_eq!(tasks[2].status, "Not Started");
    }

    #[test]
    fn test_modify_empty_table() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &[]);

        let result = ModifyTaskTool::execute(&params(0, "Done"), &store).unwrap();
        assert_eq!(result_text(&result), "❌ No tasks found.");
    }

    #[test]
    fn test_modify_out_of_range() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &["A", "B"]);

        let result = ModifyTaskTool::execute(&params(2, "Done"), &store).unwrap();
        assert_eq!(
            result_text(&result),
            "❌ Invalid index 2. Valid range: 0 to 1."
        );

        let result = ModifyTaskTool::execute(&params(-1, "Done"), &store).unwrap();
        assert_eq!(
            result_text(&result),
            "❌ Invalid index -1. Valid range: 0 to 1."
        );

        // No mutation happened
        for task in store.list_newest_first().unwrap() {
            assert_eq!(task.status, "Not Started");
        }
    }
}
