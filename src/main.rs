use anyhow::Result;
use clap::Parser;
use repvox::cli::{
    handle_catalog_command, handle_match_command, handle_parse_command, run_interactive, Cli,
    CliCommand,
};
use repvox::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("Repvox {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(CliCommand::Parse(args)) => {
            handle_parse_command(args)?;
            return Ok(());
        }
        Some(CliCommand::Match(args)) => {
            handle_match_command(args)?;
            return Ok(());
        }
        Some(CliCommand::Catalog) => {
            handle_catalog_command()?;
            return Ok(());
        }
        None => {}
    }

    run_interactive(Config::load()?).await
}
