use anyhow::{bail, Result};
use clap::Args;
use football_data_api::{Client, DateFiltered, TeamMatchesQuery};

use crate::output::{print_matches, print_teams, OutputFormat};

#[derive(Args)]
pub struct TeamArgs {
    /// Team id
    pub id: u64,
}

#[derive(Args)]
pub struct TeamMatchesArgs {
    /// Team id
    pub id: u64,

    /// Start of the date range, YYYY-MM-DD (requires --date-to)
    #[arg(long)]
    pub date_from: Option<String>,

    /// End of the date range, YYYY-MM-DD (requires --date-from)
    #[arg(long)]
    pub date_to: Option<String>,

    /// Status (e.g. SCHEDULED, FINISHED)
    #[arg(long)]
    pub status: Option<String>,

    /// HOME or AWAY
    #[arg(long)]
    pub venue: Option<String>,

    /// Maximum number of matches
    #[arg(long)]
    pub limit: Option<String>,

    /// Starting year of the season
    #[arg(long)]
    pub season: Option<String>,
}

pub async fn show(args: &TeamArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match client.team(args.id).await.into_result()? {
        Some(team) => print_teams(&[team], format),
        None => bail!("team {} not found", args.id),
    }
}

pub async fn matches(args: &TeamMatchesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = TeamMatchesQuery::default();
    if let Some(from) = &args.date_from {
        query = query.with_date_from(from);
    }
    if let Some(to) = &args.date_to {
        query = query.with_date_to(to);
    }
    if let Some(status) = &args.status {
        query = query.with_status(status);
    }
    if let Some(venue) = &args.venue {
        query = query.with_venue(venue);
    }
    if let Some(limit) = &args.limit {
        query = query.with_limit(limit);
    }
    if let Some(season) = &args.season {
        query = query.with_season(season);
    }

    let matches = client.team_matches(args.id, &query).await.into_result()?;
    print_matches(&matches, format)
}
