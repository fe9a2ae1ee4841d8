mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use standings_lib::Config;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "standings")]
#[command(about = "Sync football league standings from api-sports.io into SQLite")]
struct Cli {
    /// Output format: table, markdown or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch standings for every league and rebuild the ranked view
    Sync(commands::sync::SyncArgs),
    /// Print the ranked standings for one league
    Show(commands::show::ShowArgs),
    /// List the leagues processed by sync
    Leagues,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("standings=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    match &cli.command {
        Commands::Sync(args) => commands::sync::run(args, &load_config()?, &format).await?,
        Commands::Show(args) => commands::show::run(args, &load_config()?, &format)?,
        Commands::Leagues => commands::leagues::run(),
    }

    Ok(())
}

/// Missing or malformed settings abort the process before any work starts.
fn load_config() -> Result<Config> {
    let config = Config::from_env().map_err(|e| {
        tracing::error!("Environment is incorrectly configured: {}", e);
        e
    })?;
    Ok(config)
}
