use tracing_subscriber::EnvFilter;

use crate::config::types::AppConfig;

/// Pick the filter directive: `RUST_LOG` wins, then debug mode, then `[log] filter`.
pub fn filter_directive(config: &AppConfig, rust_log: Option<&str>) -> String {
    match rust_log {
        Some(env) if !env.trim().is_empty() => env.to_string(),
        _ if config.server.debug => "debug".into(),
        _ => config.log.filter.clone(),
    }
}

/// Install the global subscriber. Output always goes to stderr: stdout
/// carries the MCP protocol stream.
pub fn init(config: &AppConfig) -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(config, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{}': {}", directive, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;
    Ok(())
}
