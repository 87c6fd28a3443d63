use rmcp::model::JsonObject;

use crate::cli::OutputFormat;
use crate::cli::output::write_json;
use onec_mcp::core::catalog::Catalog;
use onec_mcp::core::tools::ToolOutput;

#[derive(clap::Args)]
pub struct CallArgs {
    /// Tool name
    pub tool: String,

    /// Arguments as a JSON object
    #[arg(long, default_value = "{}")]
    pub args: String,
}

pub fn run(catalog: &Catalog, args: CallArgs, format: OutputFormat) -> anyhow::Result<()> {
    let arguments: JsonObject = match serde_json::from_str(&args.args)? {
        serde_json::Value::Object(map) => map,
        _ => anyhow::bail!("--args must be a JSON object"),
    };

    let output = catalog.call_tool(&args.tool, arguments)?;

    match format {
        OutputFormat::Json => {
            let payload = match output {
                ToolOutput::Text(text) => serde_json::json!({ "tool": args.tool, "text": text }),
                ToolOutput::Json(value) => serde_json::json!({ "tool": args.tool, "json": value }),
            };
            write_json(&payload, &mut std::io::stdout().lock())?;
        }
        OutputFormat::Human => {
            println!("{}", output.render()?);
        }
    }

    Ok(())
}
