use crate::cli::OutputFormat;
use crate::cli::output::write_json;
use onec_mcp::core::catalog::Catalog;
use onec_mcp::core::resources::ResourcePayload;

#[derive(clap::Args)]
pub struct ResourceArgs {
    /// Resource name
    pub name: String,
}

pub fn run(catalog: &Catalog, args: ResourceArgs, format: OutputFormat) -> anyhow::Result<()> {
    let payload = catalog.resources().get(&args.name);

    if format == OutputFormat::Json {
        write_json(&payload, &mut std::io::stdout().lock())?;
    }

    match payload {
        ResourcePayload::Content { result } => {
            if format == OutputFormat::Human {
                println!("{}", result);
            }
            Ok(())
        }
        ResourcePayload::Error { error } => anyhow::bail!(error),
    }
}
