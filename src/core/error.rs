//! Error types and handling for the tool servers.

use thiserror::Error;

/// A specialized Result type for tool server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can escape server construction.
///
/// Tool-call failures never reach this type: each service reports them
/// through its own channel (sentinel payloads for dictionary, MCP protocol
/// errors for news, user-facing messages for todo).
#[derive(Debug, Error)]
pub enum Error {
    /// The todo service could not open or create its task file.
    #[error("Task store error: {0}")]
    Store(#[from] crate::domains::tools::definitions::todo::StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::todo::TaskStore;
    use tempfile::TempDir;

    #[test]
    fn test_store_errors_convert() {
        let dir = TempDir::new().unwrap();
        // Parent directory does not exist, so file creation fails
        let err = TaskStore::open(dir.path().join("missing").join("tasks.csv")).unwrap_err();
        let err: Error = err.into();
        assert!(err.to_string().starts_with("Task store error: "));
    }
}
