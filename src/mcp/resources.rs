// MCP resources are the registry descriptors that carry a URI.

use rmcp::model::{
    AnnotateAble, ErrorData as McpError, RawResource, ReadResourceResult, Resource,
    ResourceContents,
};

use onec_mcp::core::catalog::Catalog;

const MIME_TYPE: &str = "text/plain";

/// Resources for `resources/list`. Descriptors without a URI are reachable
/// only through the `get_resource` tool.
pub fn list(catalog: &Catalog) -> Vec<Resource> {
    catalog
        .resources()
        .list()
        .into_iter()
        .filter_map(|info| {
            let uri = info.uri?;
            let mut raw = RawResource::new(uri, info.name);
            raw.description = Some(info.description);
            raw.mime_type = Some(MIME_TYPE.into());
            Some(raw.no_annotation())
        })
        .collect()
}

/// Serve `resources/read` by URI (or bare name).
pub fn read(catalog: &Catalog, uri: &str) -> Result<ReadResourceResult, McpError> {
    let descriptor = catalog.resources().find_by_uri(uri).ok_or_else(|| {
        McpError::resource_not_found(format!("resource '{}' not found", uri), None)
    })?;

    let text = (descriptor.producer)().map_err(|e| {
        tracing::warn!(uri, error = %e, "resource producer failed");
        McpError::internal_error(format!("resource '{}' failed: {}", descriptor.name, e), None)
    })?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: Some(MIME_TYPE.into()),
            text,
            meta: None,
        }],
    })
}
