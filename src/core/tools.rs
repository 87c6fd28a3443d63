use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::catalog::Catalog;
use crate::error::{OnecError, Result};

/// Tool implementation: receives the catalog and the raw call arguments.
pub type ToolHandler = fn(&Catalog, JsonObject) -> Result<ToolOutput>;

/// What a tool hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Text(String),
    Json(serde_json::Value),
}

impl ToolOutput {
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Plain-text rendering; JSON is pretty-printed.
    pub fn render(&self) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Json(value) => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

/// A registered tool: name, description, declared input schema and handler.
#[derive(Clone)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Arc<JsonObject>,
    pub handler: ToolHandler,
}

impl ToolDescriptor {
    /// Describe a tool whose arguments deserialize into `A`.
    pub fn new<A: JsonSchema>(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: ToolHandler,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: schema_for::<A>(),
            handler,
        }
    }

    /// Describe a tool that takes no arguments.
    pub fn without_args(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: ToolHandler,
    ) -> Self {
        let mut schema = JsonObject::new();
        schema.insert("type".into(), "object".into());
        schema.insert("properties".into(), JsonObject::new().into());
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: Arc::new(schema),
            handler,
        }
    }

    pub fn to_mcp_tool(&self) -> Tool {
        Tool::new(
            self.name.clone(),
            self.description.clone(),
            self.input_schema.clone(),
        )
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Derive the JSON Schema object for an argument struct.
pub fn schema_for<A: JsonSchema>() -> Arc<JsonObject> {
    let generator = SchemaSettings::draft2020_12()
        .with(|s| s.meta_schema = None)
        .into_generator();
    let schema = generator.into_root_schema_for::<A>();
    match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(map)) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Deserialize call arguments into the tool's argument struct. Missing
/// fields take their serde defaults.
pub fn parse_args<A: DeserializeOwned>(tool: &str, args: JsonObject) -> Result<A> {
    serde_json::from_value(serde_json::Value::Object(args)).map_err(|source| {
        OnecError::InvalidArguments {
            tool: tool.to_string(),
            source,
        }
    })
}

/// Name-keyed tool descriptors. Written during startup only.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    entries: BTreeMap<String, ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, replacing any previous one with the same name.
    pub fn register(&mut self, descriptor: ToolDescriptor) {
        if self.entries.contains_key(&descriptor.name) {
            tracing::debug!(name = %descriptor.name, "replacing tool");
        }
        self.entries.insert(descriptor.name.clone(), descriptor);
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tool names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.entries.values()
    }

    /// MCP `Tool` definitions for `tools/list`.
    pub fn list(&self) -> Vec<Tool> {
        self.entries.values().map(ToolDescriptor::to_mcp_tool).collect()
    }
}
