use crate::cli::OutputFormat;
use crate::cli::output::write_json;
use onec_mcp::config::types::AppConfig;

pub fn run(cfg: &AppConfig, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            write_json(cfg, &mut std::io::stdout().lock())?;
        }
        OutputFormat::Human => {
            let toml_str = toml::to_string_pretty(cfg)?;
            println!("{}", toml_str);
        }
    }

    Ok(())
}
