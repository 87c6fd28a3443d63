use owo_colors::OwoColorize;

use crate::cli::OutputFormat;
use crate::cli::output::write_json;
use onec_mcp::core::catalog::Catalog;

pub fn run(catalog: &Catalog, format: OutputFormat) -> anyhow::Result<()> {
    let resources = catalog.resources().list();

    match format {
        OutputFormat::Json => {
            write_json(&resources, &mut std::io::stdout().lock())?;
        }
        OutputFormat::Human => {
            println!(
                "  {} {} registered",
                "resources:".green().bold(),
                resources.len()
            );
            for info in &resources {
                println!(
                    "    {:<16} {:<20} {}",
                    info.name.bold(),
                    info.uri.as_deref().unwrap_or("-").dimmed(),
                    info.description
                );
            }
        }
    }

    Ok(())
}
