//! MCP (Model Context Protocol) server module
//!
//! A JSON-RPC 2.0 server over stdio that exposes catalog search and
//! selection as MCP tools.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

pub use error::McpError;
pub use handlers::ProtocolHandlers;
pub use server::{process_line, McpServer};
pub use tools::{McpToolHandler, ToolRegistry};
