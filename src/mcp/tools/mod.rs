//! MCP tool implementations
//!
//! Each handler exposes one catalog operation to MCP clients.

pub mod get_item;
pub mod get_server_info;
pub mod handler;
pub mod list_catalog;
pub mod registry;
pub mod search_catalog;
pub mod select_item;
pub mod show_config;

pub use get_item::GetItemHandler;
pub use get_server_info::GetServerInfoHandler;
pub use handler::{parse_args, text_content, McpToolHandler};
pub use list_catalog::ListCatalogHandler;
pub use registry::ToolRegistry;
pub use search_catalog::SearchCatalogHandler;
pub use select_item::SelectItemHandler;
pub use show_config::ShowConfigHandler;
