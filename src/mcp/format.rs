// Conversion between catalog results and MCP wire types.

use rmcp::model::{CallToolResult, Content, ErrorData as McpError};

use onec_mcp::core::tools::ToolOutput;
use onec_mcp::error::OnecError;

/// Wrap a tool's output as a successful call result. Input problems the tool
/// itself reports (division by zero, bad count) are ordinary output here.
pub fn to_call_result(output: ToolOutput) -> Result<CallToolResult, McpError> {
    let content = match output {
        ToolOutput::Text(text) => Content::text(text),
        ToolOutput::Json(value) => Content::json(value)?,
    };
    Ok(CallToolResult::success(vec![content]))
}

/// Map a catalog error onto the MCP error space.
pub fn to_mcp_error(err: OnecError) -> McpError {
    match err {
        OnecError::UnknownTool(_) | OnecError::InvalidArguments { .. } => {
            McpError::invalid_params(err.to_string(), None)
        }
        _ => McpError::internal_error(err.to_string(), None),
    }
}
