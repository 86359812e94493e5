//! Agent tool servers over the Model Context Protocol.
//!
//! This crate bundles three independent MCP tool servers into one binary;
//! the `MCP_SERVICE` environment variable selects which one a process serves:
//!
//! - **dictionary**: wraps the Merriam-Webster collegiate API with seven
//!   tools that each reshape the same raw entry payload differently
//! - **news**: wraps NewsAPI.org with three pass-through query tools
//! - **todo**: a CSV-backed to-do list addressed by newest-first index
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, and the
//!   STDIO transport
//! - **domains::tools**: one definition file per tool, grouped by service,
//!   plus the router that registers the configured service's tools
//!
//! # Example
//!
//! ```rust,no_run
//! use agent_tools_mcp::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
