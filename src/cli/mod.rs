pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use onec_mcp::config;
use onec_mcp::core::catalog::Catalog;
use onec_mcp::logging;

#[derive(Parser)]
#[command(
    name = "onec-mcp",
    about = "Demonstration MCP server with toy 1C accounting tools.",
    version
)]
pub struct Cli {
    /// Config file (default: ~/.config/onec-mcp/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overrides server.debug)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the MCP server over stdio (default)
    Serve,
    /// List registered tools
    Tools,
    /// Invoke a tool locally and print its output
    Call(commands::call::CallArgs),
    /// List registered resources
    Resources,
    /// Print a resource payload
    Resource(commands::resource::ResourceArgs),
    /// Show effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Load config, install logging, build the catalog and dispatch.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    if cli.debug {
        cfg.server.debug = true;
    }
    logging::init(&cfg)?;

    let catalog = Catalog::with_builtins(cfg.server.clone());

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => crate::mcp::serve_stdio(catalog),
        Commands::Tools => commands::tools::run(&catalog, cli.format),
        Commands::Call(args) => commands::call::run(&catalog, args, cli.format),
        Commands::Resources => commands::resources::run(&catalog, cli.format),
        Commands::Resource(args) => commands::resource::run(&catalog, args, cli.format),
        Commands::Config => commands::config::run(&cfg, cli.format),
    }
}
