//! Delete-task tool definition.
//!
//! Removes the task at a newest-first display index and closes the gap.

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

/// Parameters for the delete-task tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteTaskParams {
    /// Zero-based index in newest-first order (newest task = 0).
    #[schemars(description = "Zero-based index in newest-first order (newest task = 0)")]
    pub index: i64,
}

/// Delete-task tool - remove a task by index.
pub struct DeleteTaskTool;

impl DeleteTaskTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_task";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Delete a task by its index (0-based, newest task = 0). Later tasks \
         shift down to close the gap.";

    /// Execute the tool logic.
    pub fn execute(
        params: &DeleteTaskParams,
        store: &TaskStore,
    ) -> Result<CallToolResult, StoreError> {
        info!("Deleting task {}", params.index);

        let message = match store.remove(params.index)? {
            UpdateOutcome::Applied(record) => {
                format!("🗑️ Task '{}' deleted successfully.", record.task)
            }
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
            input_schema: cached_schema_for_type::<DeleteTaskParams>(),
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
                let params: DeleteTaskParams =
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
    fn test_delete_by_display_index() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &["A", "B", "C"]);

        let result = DeleteTaskTool::execute(&DeleteTaskParams { index: 1 }, &store).unwrap();
        assert_eq!(result_text(&result), "🗑️ Task 'B' deleted successfully.");

        let names: Vec<_> = store
            .list_newest_first()
            .unwrap()
            .into_iter()
            .map(|t| t.task)
            .collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn test_delete_from_empty_table_leaves_header_only() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &[]);

        let result = DeleteTaskTool::execute(&DeleteTaskParams { index: 0 }, &store).unwrap();
        assert_eq!(result_text(&result), "❌ No tasks found.");

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim_end(), "Date,Time,Task,Status");
    }

    #[test]
    fn test_delete_out_of_range() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir, &["A"]);

        let result = DeleteTaskTool::execute(&DeleteTaskParams { index: 1 }, &store).unwrap();
        assert_eq!(
            result_text(&result),
            "❌ Invalid index 1. Valid range: 0 to 0."
        );
        assert_eq!(store.list_newest_first().unwrap().len(), 1);
    }
}
