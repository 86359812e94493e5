//! CSV-backed task store.
//!
//! The on-disk table (columns Date, Time, Task, Status, oldest-first) is
//! the single source of truth. Every mutating operation re-reads the full
//! table, applies the change at the newest-first display index, and
//! rewrites the whole file. An in-process mutex serializes each
//! read-modify-write cycle so concurrent tool calls cannot lose updates.
//!
//! Display index `i` addresses storage index `count - 1 - i`.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Default status for newly added tasks.
pub const DEFAULT_STATUS: &str = "Not Started";

/// Header row of the task table.
const HEADERS: [&str; 4] = ["Date", "Time", "Task", "Status"];

/// One row of the task table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Time")]
    pub time: String,

    #[serde(rename = "Task")]
    pub task: String,

    #[serde(rename = "Status")]
    pub status: String,
}

impl TaskRecord {
    /// Create a record stamped with the current local date and time.
    pub fn stamped_now(task: impl Into<String>, status: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            date: now.format("%d/%m/%Y").to_string(),
            time: now.format("%H:%M").to_string(),
            task: task.into(),
            status: status.into(),
        }
    }
}

/// Errors from the task store. These are infrastructure faults; index and
/// empty-table conditions are reported through [`UpdateOutcome`] instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("task table error: {0}")]
    Csv(#[from] csv::Error),
}

/// Outcome of an index-addressed mutation.
#[derive(Debug, PartialEq)]
pub enum UpdateOutcome {
    /// The mutation was applied; carries the affected record's task text.
    Applied(TaskRecord),

    /// The table has no rows; nothing was written.
    Empty,

    /// The index is outside `[0, count)`; nothing was written.
    OutOfRange { index: i64, count: usize },
}

/// CSV-backed task table with serialized read-modify-write cycles.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl TaskStore {
    /// Open a store at the given path, creating a header-only file if none
    /// exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };
        if !store.path.exists() {
            info!("Creating task file at {:?}", store.path);
            store.write_all(&[])?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // A poisoned lock only means another call panicked mid-write; the
        // file itself is still the source of truth.
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read the full table, oldest-first. A missing file reads as empty.
    fn read_all(&self) -> Result<Vec<TaskRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    /// Rewrite the full table, oldest-first, always with a header row.
    fn write_all(&self, records: &[TaskRecord]) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADERS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Append a record to the end of the table.
    pub fn append(&self, record: TaskRecord) -> Result<(), StoreError> {
        let _guard = self.guard();
        let mut records = self.read_all()?;
        records.push(record);
        self.write_all(&records)
    }

    /// All records in newest-first display order.
    pub fn list_newest_first(&self) -> Result<Vec<TaskRecord>, StoreError> {
        let _guard = self.guard();
        let mut records = self.read_all()?;
        records.reverse();
        Ok(records)
    }

    /// Overwrite the status of the record at the given display index.
    pub fn set_status(
        &self,
        display_index: i64,
        new_status: &str,
    ) -> Result<UpdateOutcome, StoreError> {
        let _guard = self.guard();
        let mut records = self.read_all()?;

        let storage_index = match Self::storage_index(display_index, records.len()) {
            Ok(index) => index,
            Err(outcome) => return Ok(outcome),
        };

        records[storage_index].status = new_status.to_string();
        let updated = records[storage_index].clone();
        self.write_all(&records)?;
        Ok(UpdateOutcome::Applied(updated))
    }

    /// Remove the record at the given display index, closing the gap.
    pub fn remove(&self, display_index: i64) -> Result<UpdateOutcome, StoreError> {
        let _guard = self.guard();
        let mut records = self.read_all()?;

        let storage_index = match Self::storage_index(display_index, records.len()) {
            Ok(index) => index,
            Err(outcome) => return Ok(outcome),
        };

        let removed = records.remove(storage_index);
        self.write_all(&records)?;
        Ok(UpdateOutcome::Applied(removed))
    }

    /// Validate a display index and translate it to a storage index.
    fn storage_index(display_index: i64, count: usize) -> Result<usize, UpdateOutcome> {
        if count == 0 {
            return Err(UpdateOutcome::Empty);
        }
        if display_index < 0 || display_index as usize >= count {
            return Err(UpdateOutcome::OutOfRange {
                index: display_index,
                count,
            });
        }
        Ok(count - 1 - display_index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> TaskStore {
        TaskStore::open(dir.path().join("tasks.csv")).unwrap()
    }

    fn record(task: &str) -> TaskRecord {
        TaskRecord {
            date: "01/01/2026".to_string(),
            time: "09:00".to_string(),
            task: task.to_string(),
            status: DEFAULT_STATUS.to_string(),
        }
    }

    #[test]
    fn test_open_creates_header_only_file() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim_end(), "Date,Time,Task,Status");
    }

    #[test]
    fn test_open_leaves_existing_file_alone() {
        let dir = TempDir::new().unwrap();
        {
            let store = open_store(&dir);
            store.append(record("keep me")).unwrap();
        }
        let store = open_store(&dir);
        let tasks = store.list_newest_first().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task, "keep me");
    }

    #[test]
    fn test_list_is_newest_first() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        for task in ["A", "B", "C"] {
            store.append(record(task)).unwrap();
        }
        let tasks = store.list_newest_first().unwrap();
        let names: Vec<_> = tasks.iter().map(|t| t.task.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_on_disk_order_is_oldest_first() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        for task in ["A", "B"] {
            store.append(record(task)).unwrap();
        }
        let contents = std::fs::read_to_string(store.path()).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert!(lines[1].contains("A"));
        assert!(lines[2].contains("B"));
    }

    #[test]
    fn test_set_status_targets_display_index() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        for task in ["A", "B", "C"] {
            store.append(record(task)).unwrap();
        }

        // Display index 0 is C, the most recent task
        let outcome = store.set_status(0, "Done").unwrap();
        match outcome {
            UpdateOutcome::Applied(rec) => assert_eq!(rec.task, "C"),
            other => panic!("unexpected outcome: {:?}", other),
        }

        let tasks = store.list_newest_first().unwrap();
        assert_eq!(tasks[0].task, "C");
        assert_eq!(tasks[0].status, "Done");
        assert_eq!(tasks[1].status, DEFAULT_STATUS);
        assert_eq!(tasks[2].status, DEFAULT_STATUS);
    }

    #[test]
    fn test_remove_closes_the_gap() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        for task in ["A", "B", "C"] {
            store.append(record(task)).unwrap();
        }

        let outcome = store.remove(1).unwrap();
        match outcome {
            UpdateOutcome::Applied(rec) => assert_eq!(rec.task, "B"),
            other => panic!("unexpected outcome: {:?}", other),
        }

        let names: Vec<_> = store
            .list_newest_first()
            .unwrap()
            .into_iter()
            .map(|t| t.task)
            .collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn test_empty_table_mutations_do_not_write() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.set_status(0, "Done").unwrap(), UpdateOutcome::Empty);
        assert_eq!(store.remove(0).unwrap(), UpdateOutcome::Empty);

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim_end(), "Date,Time,Task,Status");
    }

    #[test]
    fn test_out_of_range_index_does_not_mutate() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        store.append(record("A")).unwrap();

        for index in [-1, 1, 99] {
            assert_eq!(
                store.set_status(index, "Done").unwrap(),
                UpdateOutcome::OutOfRange { index, count: 1 }
            );
        }

        let tasks = store.list_newest_first().unwrap();
        assert_eq!(tasks[0].status, DEFAULT_STATUS);
    }

    #[test]
    fn test_records_round_trip_through_csv() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let original = TaskRecord {
            date: "25/12/2026".to_string(),
            time: "23:59".to_string(),
            task: "task, with commas \"and quotes\"".to_string(),
            status: "In Progress".to_string(),
        };
        store.append(original.clone()).unwrap();

        let tasks = store.list_newest_first().unwrap();
        assert_eq!(tasks[0], original);
    }
}
