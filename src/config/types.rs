use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log: LogConfig,
}

/// Server metadata reported by `greet`, `get_status` and the MCP handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub author: String,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "1c-accounting-mcp".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            author: "@tarasov46".into(),
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset and debug is off.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".into(),
        }
    }
}
