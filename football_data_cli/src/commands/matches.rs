use anyhow::{bail, Result};
use clap::Args;
use football_data_api::{Client, DateFiltered, MatchesQuery};

use crate::output::{print_matches, OutputFormat};

#[derive(Args)]
pub struct MatchesArgs {
    /// Competition ids or codes, comma-separated (e.g. PL,SA)
    #[arg(long, value_delimiter = ',')]
    pub competitions: Vec<String>,

    /// Start of the date range, YYYY-MM-DD (requires --date-to)
    #[arg(long)]
    pub date_from: Option<String>,

    /// End of the date range, YYYY-MM-DD (requires --date-from)
    #[arg(long)]
    pub date_to: Option<String>,

    /// Status (e.g. SCHEDULED, LIVE, FINISHED)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct MatchArgs {
    /// Match id
    pub id: u64,
}

pub async fn list(args: &MatchesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = MatchesQuery::default().with_competitions(&args.competitions);
    if let Some(from) = &args.date_from {
        query = query.with_date_from(from);
    }
    if let Some(to) = &args.date_to {
        query = query.with_date_to(to);
    }
    if let Some(status) = &args.status {
        query = query.with_status(status);
    }

    let matches = client.matches(&query).await.into_result()?;
    print_matches(&matches, format)
}

pub async fn show(args: &MatchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match client.get_match(args.id).await.into_result()? {
        Some(fixture) => print_matches(&[fixture], format),
        None => bail!("match {} not found", args.id),
    }
}
