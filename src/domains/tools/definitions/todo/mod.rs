//! Todo tools module.
//!
//! Four tools over a CSV-backed task table. Tasks have no stored id: they
//! are addressed by their zero-based index in newest-first display order
//! (index 0 is the most recently added task). Validation failures come back
//! as human-readable messages; file I/O faults propagate as protocol
//! errors.

pub mod store;

pub mod add_task;
pub mod delete_task;
pub mod list_tasks;
pub mod modify_task;

pub use store::{StoreError, TaskRecord, TaskStore, UpdateOutcome};

pub use add_task::{AddTaskParams, AddTaskTool};
pub use delete_task::{DeleteTaskParams, DeleteTaskTool};
pub use list_tasks::{ListTasksParams, ListTasksTool};
pub use modify_task::{ModifyTaskParams, ModifyTaskTool};
