use std::sync::Arc;

use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData as McpError, Implementation,
    ListResourcesResult, ListToolsResult, PaginatedRequestParams, ReadResourceRequestParams,
    ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};

use onec_mcp::core::catalog::Catalog;

use super::{format, resources};

/// MCP front end for a frozen catalog.
#[derive(Clone)]
pub struct OnecServer {
    catalog: Arc<Catalog>,
}

impl OnecServer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl ServerHandler for OnecServer {
    fn get_info(&self) -> ServerInfo {
        let cfg = self.catalog.config();
        let mut server_info = Implementation::from_build_env();
        server_info.name = cfg.name.clone();
        server_info.version = cfg.version.clone();

        ServerInfo {
            instructions: Some(
                "Demo server for 1C Accounting. Call get_status for the tool list, greet for \
                 usage notes, list_resources and get_resource for documents."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info,
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.catalog.tools().list()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request.arguments.unwrap_or_default();
        let output = self
            .catalog
            .call_tool(&request.name, args)
            .map_err(|e| {
                tracing::warn!(tool = %request.name, error = %e, "tool call rejected");
                format::to_mcp_error(e)
            })?;
        format::to_call_result(output)
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(resources::list(
            &self.catalog,
        )))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        tracing::info!(uri = %request.uri, "resource read");
        resources::read(&self.catalog, &request.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onec_mcp::config::types::ServerConfig;

    fn server() -> OnecServer {
        OnecServer::new(Arc::new(Catalog::with_builtins(ServerConfig {
            name: "test-server".into(),
            version: "1.2.3".into(),
            ..ServerConfig::default()
        })))
    }

    #[test]
    fn info_reports_config() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "test-server");
        assert_eq!(info.server_info.version, "1.2.3");
        assert!(info.instructions.is_some());
    }

    #[test]
    fn info_advertises_tools_and_resources() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
    }
}
