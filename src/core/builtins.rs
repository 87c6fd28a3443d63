// Built-in tools and resources, registered explicitly at startup.

use chrono::{Local, NaiveDateTime};
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::Deserialize;

use super::calculator;
use super::catalog::Catalog;
use super::greeting::{self, CLIENT_CONFIG_SNIPPET};
use super::resources::ResourceDescriptor;
use super::test_data;
use super::tools::{ToolDescriptor, ToolOutput, parse_args};
use crate::config::types::ServerConfig;
use crate::error::{OnecError, Result};

pub const GREET: &str = "greet";
pub const CALCULATE: &str = "calculate";
pub const GENERATE_TEST_DATA: &str = "generate_test_data";
pub const GET_STATUS: &str = "get_status";
pub const LIST_RESOURCES: &str = "list_resources";
pub const GET_RESOURCE: &str = "get_resource";

pub const SERVER_INFO: &str = "server_info";
pub const SERVER_INFO_URI: &str = "info://1c-server";
pub const SERVER_CONFIG: &str = "server_config";
pub const SERVER_CONFIG_URI: &str = "config://server";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GreetArgs {
    /// Name to greet
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    greeting::DEFAULT_NAME.into()
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CalculateArgs {
    /// First operand
    pub a: f64,
    /// Second operand
    pub b: f64,
    /// One of: add, subtract, multiply, divide
    #[serde(default = "default_operation")]
    pub operation: String,
}

fn default_operation() -> String {
    "add".into()
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GenerateTestDataArgs {
    /// Number of records to generate (1 to 20)
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_count() -> i64 {
    test_data::DEFAULT_COUNT
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetResourceArgs {
    /// Name of a registered resource, see list_resources
    pub resource_name: String,
}

/// Register every built-in tool on the catalog.
pub fn register_tools(catalog: &mut Catalog) {
    catalog.register_tool(ToolDescriptor::new::<GreetArgs>(
        GREET,
        "Greet the user and describe the 1C MCP server",
        greet,
    ));
    catalog.register_tool(ToolDescriptor::new::<CalculateArgs>(
        CALCULATE,
        "Test calculator: add, subtract, multiply or divide two numbers",
        calculate,
    ));
    catalog.register_tool(ToolDescriptor::new::<GenerateTestDataArgs>(
        GENERATE_TEST_DATA,
        "Generate fake 1C accounting records (at most 20)",
        generate_test_data,
    ));
    catalog.register_tool(ToolDescriptor::without_args(
        GET_STATUS,
        "Server name, version, time and registered tools",
        get_status,
    ));
    catalog.register_tool(ToolDescriptor::without_args(
        LIST_RESOURCES,
        "List registered resources with name, description and URI",
        list_resources,
    ));
    catalog.register_tool(ToolDescriptor::new::<GetResourceArgs>(
        GET_RESOURCE,
        "Read a registered resource by name",
        get_resource,
    ));
}

/// Register the built-in resources. Call after `register_tools`: the server
/// info document lists the tools registered at that point.
pub fn register_resources(catalog: &mut Catalog) {
    let info = server_info_document(catalog);
    catalog.register_resource(
        ResourceDescriptor::new(SERVER_INFO, "Information about the 1C MCP server", move || {
            Ok(info.clone())
        })
        .with_uri(SERVER_INFO_URI),
    );

    let config = catalog.config().clone();
    catalog.register_resource(
        ResourceDescriptor::new(SERVER_CONFIG, "Effective server configuration (TOML)", move || {
            toml::to_string_pretty(&config).map_err(|e| OnecError::Producer(e.to_string()))
        })
        .with_uri(SERVER_CONFIG_URI),
    );
}

fn greet(catalog: &Catalog, args: JsonObject) -> Result<ToolOutput> {
    let args: GreetArgs = parse_args(GREET, args)?;
    let now = Local::now().naive_local();
    Ok(ToolOutput::Text(greeting::greet(
        &args.name,
        now,
        catalog.config(),
    )))
}

fn calculate(_catalog: &Catalog, args: JsonObject) -> Result<ToolOutput> {
    let args: CalculateArgs = parse_args(CALCULATE, args)?;
    Ok(ToolOutput::Text(calculator::calculate(
        args.a,
        args.b,
        &args.operation,
    )))
}

fn generate_test_data(_catalog: &Catalog, args: JsonObject) -> Result<ToolOutput> {
    let args: GenerateTestDataArgs = parse_args(GENERATE_TEST_DATA, args)?;
    let today = Local::now().date_naive();
    Ok(ToolOutput::Text(test_data::generate_test_data(
        args.count,
        &mut rand::rng(),
        today,
    )))
}

fn get_status(catalog: &Catalog, _args: JsonObject) -> Result<ToolOutput> {
    Ok(ToolOutput::Text(format_status(
        catalog,
        Local::now().naive_local(),
    )))
}

fn list_resources(catalog: &Catalog, _args: JsonObject) -> Result<ToolOutput> {
    ToolOutput::json(&catalog.resources().list())
}

fn get_resource(catalog: &Catalog, args: JsonObject) -> Result<ToolOutput> {
    let args: GetResourceArgs = parse_args(GET_RESOURCE, args)?;
    ToolOutput::json(&catalog.resources().get(&args.resource_name))
}

/// Terse status summary in the `[tag]` / `→ next:` style.
pub fn format_status(catalog: &Catalog, now: NaiveDateTime) -> String {
    let cfg = catalog.config();
    let tools = catalog.tools().names();
    let resources: Vec<String> = catalog
        .resources()
        .list()
        .into_iter()
        .map(|r| r.name)
        .collect();

    let mut lines = Vec::new();
    lines.push(format!("[status] {} v{}", cfg.name, cfg.version));
    lines.push(format!("  time: {}", now.format("%Y-%m-%d %H:%M:%S")));
    lines.push(format!("  author: {}", cfg.author));
    lines.push(format!("  debug: {}", if cfg.debug { "on" } else { "off" }));
    lines.push(format!("  tools ({}): {}", tools.len(), tools.join(", ")));
    lines.push(format!(
        "  resources ({}): {}",
        resources.len(),
        resources.join(", ")
    ));
    lines.push(format!("→ next: {} | {} <name>", LIST_RESOURCES, GET_RESOURCE));
    lines.join("\n")
}

/// The static `server_info` document.
pub fn server_info_document(catalog: &Catalog) -> String {
    let cfg: &ServerConfig = catalog.config();
    let title = "MCP server for 1C:Enterprise";

    let mut lines = Vec::new();
    lines.push(title.to_string());
    lines.push("=".repeat(title.chars().count()));
    lines.push(String::new());
    lines.push("Purpose: connect 1C Accounting to AI assistants over MCP.".into());
    lines.push(String::new());
    lines.push("Tools:".into());
    for tool in catalog.tools().descriptors() {
        lines.push(format!("- {}: {}", tool.name, tool.description));
    }
    lines.push(String::new());
    lines.push(format!("Server: {} v{}", cfg.name, cfg.version));
    lines.push(format!("Author: {}", cfg.author));
    lines.push(String::new());
    lines.push("MCP client configuration:".into());
    lines.push(CLIENT_CONFIG_SNIPPET.into());
    lines.join("\n")
}
