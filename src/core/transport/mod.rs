//! Transport layer for the tool servers.
//!
//! The only transport is STDIO, the standard MCP mode: the host launches the
//! process and speaks JSON-RPC over stdin/stdout. The services expose no
//! direct network listener.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
