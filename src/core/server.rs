//! MCP server implementation and lifecycle management.
//!
//! The server registers the tool router for the configured service and
//! implements the MCP protocol via rmcp's `#[tool_handler]` macro. Tools are
//! defined in `domains/tools/definitions/` with one file per tool; the
//! router is built dynamically in `domains/tools/router.rs`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::{Config, ServiceKind};
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp and dispatches tool calls
/// to the configured service's tools.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only when the todo service cannot create its backing file.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);

        Ok(Self {
            tool_router: build_tool_router::<Self>(config.clone())?,
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    fn instructions(&self) -> &'static str {
        match self.config.service {
            ServiceKind::Dictionary => {
                "Dictionary lookup server backed by Merriam-Webster. Tools return \
                 definitions, parts of speech, pronunciations, and stem information \
                 for English words. Failures are reported inside the result payload."
            }
            ServiceKind::News => {
                "News query server backed by NewsAPI.org. Tools return the raw \
                 NewsAPI response for top headlines, full-text search, and source \
                 listings."
            }
            ServiceKind::Todo => {
                "To-do list server backed by a CSV file. Tasks are addressed by \
                 their zero-based index in newest-first order (index 0 is the most \
                 recently added task)."
            }
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().to_string().into(),
                version: self.version().to_string().into(),
                ..Default::default()
            },
            instructions: Some(self.instructions().to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
