use anyhow::{bail, Result};
use clap::Args;
use football_data_api::{Client, CompetitionMatchesQuery, CompetitionTeamsQuery, DateFiltered};

use crate::output::{print_competitions, print_matches, print_teams, OutputFormat};

#[derive(Args)]
pub struct CompetitionArgs {
    /// Competition id (e.g. 2021) or code (e.g. PL)
    pub competition: String,
}

#[derive(Args)]
pub struct TeamsArgs {
    /// Competition id (e.g. 2021) or code (e.g. PL)
    pub competition: String,

    /// Starting year of the season (e.g. 2020 for 2020/21)
    #[arg(long)]
    pub season: Option<String>,

    /// Stage (e.g. GROUP_STAGE, FINAL)
    #[arg(long)]
    pub stage: Option<String>,
}

#[derive(Args)]
pub struct CompetitionMatchesArgs {
    /// Competition id (e.g. 2021) or code (e.g. PL)
    pub competition: String,

    /// Start of the date range, YYYY-MM-DD (requires --date-to)
    #[arg(long)]
    pub date_from: Option<String>,

    /// End of the date range, YYYY-MM-DD (requires --date-from)
    #[arg(long)]
    pub date_to: Option<String>,

    /// Stage (e.g. GROUP_STAGE, FINAL)
    #[arg(long)]
    pub stage: Option<String>,

    /// Status (e.g. SCHEDULED, FINISHED)
    #[arg(long)]
    pub status: Option<String>,

    /// Matchday number
    #[arg(long)]
    pub matchday: Option<String>,

    /// Group (e.g. GROUP_A)
    #[arg(long)]
    pub group: Option<String>,

    /// Starting year of the season
    #[arg(long)]
    pub season: Option<String>,
}

pub async fn list(client: &Client, format: &OutputFormat) -> Result<()> {
    let competitions = client.competitions().await.into_result()?;
    print_competitions(&competitions, format)
}

pub async fn show(args: &CompetitionArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match client.competition(&args.competition).await.into_result()? {
        Some(competition) => print_competitions(&[competition], format),
        None => bail!("competition '{}' not found", args.competition),
    }
}

pub async fn teams(args: &TeamsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = CompetitionTeamsQuery::default();
    if let Some(season) = &args.season {
        query = query.with_season(season);
    }
    if let Some(stage) = &args.stage {
        query = query.with_stage(stage);
    }

    let teams = client
        .competition_teams(&args.competition, &query)
        .await
        .into_result()?;
    print_teams(&teams, format)
}

pub async fn matches(
    args: &CompetitionMatchesArgs,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let mut query = CompetitionMatchesQuery::default();
    if let Some(from) = &args.date_from {
        query = query.with_date_from(from);
    }
    if let Some(to) = &args.date_to {
        query = query.with_date_to(to);
    }
    if let Some(stage) = &args.stage {
        query = query.with_stage(stage);
    }
    if let Some(status) = &args.status {
        query = query.with_status(status);
    }
    if let Some(matchday) = &args.matchday {
        query = query.with_matchday(matchday);
    }
    if let Some(group) = &args.group {
        query = query.with_group(group);
    }
    if let Some(season) = &args.season {
        query = query.with_season(season);
    }

    let matches = client
        .competition_matches(&args.competition, &query)
        .await
        .into_result()?;
    print_matches(&matches, format)
}
