//! Domains module containing business logic organized by bounded contexts.
//!
//! The only domain here is `tools`: the dictionary, news, and todo tool
//! definitions plus the router that registers the configured service's
//! tools with the MCP server.

pub mod tools;
