use owo_colors::OwoColorize;

use crate::cli::OutputFormat;
use crate::cli::output::{describe_params, write_json};
use onec_mcp::core::catalog::Catalog;

pub fn run(catalog: &Catalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let tools: Vec<_> = catalog
                .tools()
                .descriptors()
                .map(|t| {
                    serde_json::json!({
                        "name": t.name,
                        "description": t.description,
                        "input_schema": t.input_schema.as_ref(),
                    })
                })
                .collect();
            write_json(&tools, &mut std::io::stdout().lock())?;
        }
        OutputFormat::Human => {
            println!(
                "  {} {} registered",
                "tools:".green().bold(),
                catalog.tools().len()
            );
            for tool in catalog.tools().descriptors() {
                println!("    {:<20} {}", tool.name.bold(), tool.description);
                let params = describe_params(tool);
                if !params.is_empty() {
                    println!("    {:<20} {}", "", params.join(" ").dimmed());
                }
            }
        }
    }

    Ok(())
}
