use rmcp::model::JsonObject;

use super::builtins;
use super::resources::{ResourceDescriptor, ResourceRegistry};
use super::tools::{ToolDescriptor, ToolOutput, ToolRegistry};
use crate::config::types::ServerConfig;
use crate::error::{OnecError, Result};

/// Config plus the tool and resource registries.
///
/// Built with `&mut` access during startup, then shared read-only (the MCP
/// server holds it in an `Arc`), so no lookup ever needs a lock.
#[derive(Debug)]
pub struct Catalog {
    config: ServerConfig,
    tools: ToolRegistry,
    resources: ResourceRegistry,
}

impl Catalog {
    /// An empty catalog with no tools or resources.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            tools: ToolRegistry::new(),
            resources: ResourceRegistry::new(),
        }
    }

    /// A catalog with every built-in tool and resource registered.
    pub fn with_builtins(config: ServerConfig) -> Self {
        let mut catalog = Self::new(config);
        builtins::register_tools(&mut catalog);
        builtins::register_resources(&mut catalog);
        tracing::debug!(
            tools = catalog.tools.len(),
            resources = catalog.resources.len(),
            "catalog ready"
        );
        catalog
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    pub fn register_tool(&mut self, descriptor: ToolDescriptor) {
        self.tools.register(descriptor);
    }

    pub fn register_resource(&mut self, descriptor: ResourceDescriptor) {
        self.resources.register(descriptor);
    }

    /// Dispatch a tool call by name.
    pub fn call_tool(&self, name: &str, args: JsonObject) -> Result<ToolOutput> {
        let descriptor = self
            .tools
            .get(name)
            .ok_or_else(|| OnecError::UnknownTool(name.to_string()))?;

        tracing::info!(tool = name, ?args, "tool call");
        (descriptor.handler)(self, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::ResourcePayload;
    use serde_json::json;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn text(output: ToolOutput) -> String {
        match output {
            ToolOutput::Text(t) => t,
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn builtins_register_six_tools() {
        let catalog = Catalog::with_builtins(ServerConfig::default());
        assert_eq!(
            catalog.tools().names(),
            vec![
                "calculate",
                "generate_test_data",
                "get_resource",
                "get_status",
                "greet",
                "list_resources",
            ]
        );
    }

    #[test]
    fn unknown_tool_is_error() {
        let catalog = Catalog::with_builtins(ServerConfig::default());
        let err = catalog.call_tool("explode", JsonObject::new()).unwrap_err();
        assert!(matches!(err, OnecError::UnknownTool(ref n) if n == "explode"));
    }

    #[test]
    fn calculate_defaults_to_add() {
        let catalog = Catalog::with_builtins(ServerConfig::default());
        let out = catalog
            .call_tool("calculate", args(json!({"a": 2, "b": 3})))
            .unwrap();
        assert_eq!(text(out), "2 + 3 = 5");
    }

    #[test]
    fn calculate_divide_by_zero_is_a_result() {
        let catalog = Catalog::with_builtins(ServerConfig::default());
        let out = catalog
            .call_tool(
                "calculate",
                args(json!({"a": 10, "b": 0, "operation": "divide"})),
            )
            .unwrap();
        assert!(text(out).contains("division by zero"));
    }

    #[test]
    fn calculate_rejects_non_numeric_operand() {
        let catalog = Catalog::with_builtins(ServerConfig::default());
        let err = catalog
            .call_tool("calculate", args(json!({"a": "ten", "b": 1})))
            .unwrap_err();
        assert!(matches!(err, OnecError::InvalidArguments { .. }));
    }

    #[test]
    fn greet_defaults_to_user() {
        let catalog = Catalog::with_builtins(ServerConfig::default());
        let out = catalog.call_tool("greet", JsonObject::new()).unwrap();
        assert!(text(out).starts_with("Hello, User!"));
    }

    #[test]
    fn generate_test_data_defaults_to_five() {
        let catalog = Catalog::with_builtins(ServerConfig::default());
        let out = text(
            catalog
                .call_tool("generate_test_data", JsonObject::new())
                .unwrap(),
        );
        assert!(out.contains("\n5. "));
        assert!(!out.contains("\n6. "));
    }

    #[test]
    fn get_resource_unknown_has_only_error() {
        let catalog = Catalog::with_builtins(ServerConfig::default());
        let out = catalog
            .call_tool("get_resource", args(json!({"resource_name": "nonexistent"})))
            .unwrap();
        let ToolOutput::Json(value) = out else {
            panic!("expected json");
        };
        assert!(value.get("error").is_some());
        assert!(value.get("result").is_none());
    }

    #[test]
    fn replaced_resource_serves_new_producer() {
        let mut catalog = Catalog::with_builtins(ServerConfig::default());
        catalog.register_resource(ResourceDescriptor::new("server_info", "replaced", || {
            Ok("v2".to_string())
        }));

        assert_eq!(
            catalog.resources().get("server_info"),
            ResourcePayload::Content {
                result: "v2".into()
            }
        );
        let out = catalog
            .call_tool("get_resource", args(json!({"resource_name": "server_info"})))
            .unwrap();
        assert_eq!(out, ToolOutput::Json(json!({"result": "v2"})));
    }

    #[test]
    fn empty_catalog_has_nothing() {
        let catalog = Catalog::new(ServerConfig::default());
        assert!(catalog.tools().is_empty());
        assert!(catalog.resources().is_empty());
    }
}
