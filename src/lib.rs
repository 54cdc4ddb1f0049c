//! mcpconf — MCP server configuration management.
//!
//! A named record of MCP server connection descriptors persisted in
//! local key-value storage, plus the edit-buffer panel that fronts it.

pub mod config;
pub mod notify;
pub mod storage;
pub mod ui;
