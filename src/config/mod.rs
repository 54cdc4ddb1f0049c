//! MCP server configuration: data model and persisted store.

mod store;
mod types;

pub use store::{ConfigError, ConfigStore, CONFIG_KEY};
pub use types::{McpConfig, ServerConfig, Transport};
