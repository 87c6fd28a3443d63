use chrono::NaiveDateTime;

use crate::config::types::ServerConfig;

pub const DEFAULT_NAME: &str = "User";

/// Sample `mcpServers` entry shown to users wiring the server into a client.
pub const CLIENT_CONFIG_SNIPPET: &str =
    r#"{"mcpServers": {"1c-accounting": {"command": "onec-mcp", "args": ["serve"]}}}"#;

/// Render the greeting block for `name` at the given local time.
pub fn greet(name: &str, now: NaiveDateTime, config: &ServerConfig) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Hello, {}!", name));
    lines.push(String::new());
    lines.push("Welcome to the MCP server for 1C Accounting.".into());
    lines.push(String::new());
    lines.push("Server info:".into());
    lines.push(format!("  time: {}", now.format("%Y-%m-%d %H:%M:%S")));
    lines.push("  status: running".into());
    lines.push(format!("  version: {}", config.version));
    lines.push(format!("  author: {}", config.author));
    lines.push(String::new());
    lines.push("This server is meant for working with 1C:Enterprise over MCP.".into());
    lines.push("Available tools are listed by get_status.".into());
    lines.push(String::new());
    lines.push("To use it from an MCP client, add to its configuration:".into());
    lines.push(CLIENT_CONFIG_SNIPPET.into());
    lines.join("\n")
}
