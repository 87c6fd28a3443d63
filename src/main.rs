use clap::Parser;

mod cli;
mod mcp;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)?;

    Ok(())
}
