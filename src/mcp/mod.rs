pub mod format;
pub mod resources;
pub mod tools;

use std::sync::Arc;

use rmcp::ServiceExt;

use onec_mcp::core::catalog::Catalog;
use tools::OnecServer;

/// Start the MCP server over stdio. Blocks until the client disconnects or
/// the process is interrupted.
pub fn serve_stdio(catalog: Catalog) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(serve(catalog));

    // The stdin reader sits on a blocking thread that cannot be cancelled.
    // Don't wait for it.
    rt.shutdown_background();
    result
}

async fn serve(catalog: Catalog) -> anyhow::Result<()> {
    tracing::info!(
        name = %catalog.config().name,
        version = %catalog.config().version,
        tools = catalog.tools().len(),
        "starting MCP server on stdio"
    );

    // One interrupt listener covers both the handshake and the session.
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);

    let server = OnecServer::new(Arc::new(catalog));
    let service = tokio::select! {
        service = server.serve(rmcp::transport::stdio()) => service?,
        signal = &mut interrupted => {
            signal?;
            tracing::info!("interrupted before handshake, shutting down");
            return Ok(());
        }
    };

    tokio::select! {
        reason = service.waiting() => {
            let reason = reason?;
            tracing::info!(?reason, "MCP session closed");
        }
        signal = &mut interrupted => {
            signal?;
            tracing::info!("interrupted, shutting down");
        }
    }

    Ok(())
}
