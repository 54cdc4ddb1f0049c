use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Connection mechanism for an MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// Server-sent events endpoint.
    Sse,
    /// Streamable HTTP endpoint.
    StreamableHttp,
}

/// Connection descriptor for a single named MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub transport: Transport,
    /// Endpoint URL for the server.
    pub url: String,
}

/// The full MCP server record: server name → connection descriptor.
///
/// Serializes as the bare JSON object (`{"name": {"transport": ..}}`),
/// the same shape the persisted value holds. Keys are unique; order is
/// irrelevant, so a BTreeMap keeps serialization deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct McpConfig {
    pub servers: BTreeMap<String, ServerConfig>,
}

impl McpConfig {
    /// Compact serialization, the persisted form.
    ///
    /// Serializing a record is infallible (maps, strings, and unit
    /// enum tags), so this never observes its fallback.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// 2-space-indented serialization, used to seed the edit buffer.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for McpConfig {
    fn default() -> Self {
        let mut servers = BTreeMap::new();
        servers.insert(
            "enso_basic".to_string(),
            ServerConfig {
                transport: Transport::Sse,
                url: "https://mcp.enso.sh/sse".to_string(),
            },
        );
        servers.insert(
            "enso_rag".to_string(),
            ServerConfig {
                transport: Transport::Sse,
                url: "https://mcp-sse-o98o.onrender.com/sse".to_string(),
            },
        );
        Self { servers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_two_enso_servers() {
        let config = McpConfig::default();
        assert_eq!(config.servers.len(), 2);

        let basic = config.servers.get("enso_basic").expect("enso_basic present");
        assert_eq!(basic.transport, Transport::Sse);
        assert_eq!(basic.url, "https://mcp.enso.sh/sse");

        let rag = config.servers.get("enso_rag").expect("enso_rag present");
        assert_eq!(rag.transport, Transport::Sse);
        assert_eq!(rag.url, "https://mcp-sse-o98o.onrender.com/sse");
    }

    #[test]
    fn to_json_is_the_compact_form() {
        let json = r#"{"a":{"transport":"sse","url":"u"}}"#;
        let config: McpConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.to_json(), json);
    }

    #[test]
    fn serializes_as_bare_object() {
        let config = McpConfig::default();
        let value: serde_json::Value = serde_json::from_str(&config.to_json_pretty()).unwrap();
        assert_eq!(value["enso_basic"]["transport"], "sse");
        assert_eq!(value["enso_basic"]["url"], "https://mcp.enso.sh/sse");
    }

    #[test]
    fn transport_tags_round_trip() {
        let json = r#"{"transport":"streamable_http","url":"https://example.com/mcp"}"#;
        let server: ServerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(server.transport, Transport::StreamableHttp);
        assert_eq!(serde_json::to_string(&server).unwrap(), json);
    }

    #[test]
    fn unknown_transport_is_rejected() {
        let json = r#"{"transport":"carrier_pigeon","url":"u"}"#;
        assert!(serde_json::from_str::<ServerConfig>(json).is_err());
    }
}
