//! Workato MCP Server library.
//!
//! Provides the [`WorkatoMcpServer`](server::WorkatoMcpServer) MCP server handler and
//! tool parameter types. Used by the `workato-mcp` binary and available for
//! integration testing.

pub mod server;
pub mod tools;
