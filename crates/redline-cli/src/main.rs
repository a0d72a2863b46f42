mod cli;
mod commands;
mod host;

use anyhow::Result;
use clap::Parser;
use redline_config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    match cli.command {
        cli::Commands::Inspect { page } => commands::inspect::handle(&page, &config),
        cli::Commands::Preview {
            page,
            sets,
            groups,
            adds,
        } => commands::preview::handle(&page, &config, &sets, &groups, &adds).await,
        cli::Commands::Edit { page, term, action } => {
            commands::edit::handle(&page, &config, &term, action).await
        }
        cli::Commands::Search { query } => commands::search::handle(&config, &query).await,
        cli::Commands::Config { path } => commands::config::handle(&config, cli.config, path),
    }
}
