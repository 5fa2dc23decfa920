mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use football_data_api::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "football-data")]
#[command(about = "Query competitions, teams and matches from football-data.org")]
struct Cli {
    /// API key; falls back to FOOTBALL_API_KEY (also read from .env)
    #[arg(long, global = true, env = "FOOTBALL_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available competitions
    Competitions,
    /// Show one competition by id or code
    Competition(commands::competitions::CompetitionArgs),
    /// List the teams of a competition
    Teams(commands::competitions::TeamsArgs),
    /// List the matches of a competition
    CompetitionMatches(commands::competitions::CompetitionMatchesArgs),
    /// List matches across competitions
    Matches(commands::matches::MatchesArgs),
    /// Show one match by id
    Match(commands::matches::MatchArgs),
    /// Show one team by id
    Team(commands::teams::TeamArgs),
    /// List the matches of a team
    TeamMatches(commands::teams::TeamMatchesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("football_data_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let config = Config::resolve(cli.api_key.as_deref())?;
    tracing::debug!("Using API root {}", config.base_url());
    let client = Client::with_config(config)?;

    match &cli.command {
        Commands::Competitions => commands::competitions::list(&client, &format).await?,
        Commands::Competition(args) => commands::competitions::show(args, &client, &format).await?,
        Commands::Teams(args) => commands::competitions::teams(args, &client, &format).await?,
        Commands::CompetitionMatches(args) => {
            commands::competitions::matches(args, &client, &format).await?
        }
        Commands::Matches(args) => commands::matches::list(args, &client, &format).await?,
        Commands::Match(args) => commands::matches::show(args, &client, &format).await?,
        Commands::Team(args) => commands::teams::show(args, &client, &format).await?,
        Commands::TeamMatches(args) => commands::teams::matches(args, &client, &format).await?,
    }

    Ok(())
}
