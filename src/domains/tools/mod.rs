//! Tools domain module.
//!
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations, grouped by service
//!   (one file per tool)
//! - `router.rs` - Builds the ToolRouter for the configured service
//! - `common.rs` - Shared result helpers
//!
//! ## Adding a new tool
//!
//! 1. Create a new file under `definitions/<service>/`
//! 2. Define params, `execute()`, `to_tool()`, and `create_route()`
//! 3. Export it in the service's `mod.rs`
//! 4. Add the route in `router.rs`

pub mod common;
pub mod definitions;
pub mod router;

pub use router::build_tool_router;
