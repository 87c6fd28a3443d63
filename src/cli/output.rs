use std::io::Write;

use serde::Serialize;

use onec_mcp::core::tools::ToolDescriptor;

/// Pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(value: &T, writer: &mut dyn Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// `name(default)` fragments for each property in a tool's input schema.
pub fn describe_params(tool: &ToolDescriptor) -> Vec<String> {
    let Some(props) = tool.input_schema.get("properties").and_then(|p| p.as_object()) else {
        return Vec::new();
    };

    props
        .iter()
        .map(|(name, schema)| match schema.get("default") {
            Some(default) => format!("{}={}", name, default),
            None => name.clone(),
        })
        .collect()
}
