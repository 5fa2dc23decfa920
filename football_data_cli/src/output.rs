use anyhow::Result;
use football_data_api::types::{Competition, Match, Team};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct CompetitionRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Area")]
    #[serde(rename = "Area")]
    area: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    competition_type: String,
    #[tabled(rename = "Seasons")]
    #[serde(rename = "Seasons")]
    seasons: String,
}

#[derive(Tabled, Serialize)]
struct TeamRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Short Name")]
    #[serde(rename = "Short Name")]
    short_name: String,
    #[tabled(rename = "TLA")]
    #[serde(rename = "TLA")]
    tla: String,
    #[tabled(rename = "Founded")]
    #[serde(rename = "Founded")]
    founded: String,
    #[tabled(rename = "Venue")]
    #[serde(rename = "Venue")]
    venue: String,
}

#[derive(Tabled, Serialize)]
struct MatchRow {
    #[tabled(rename = "Id")]
    #[serde(rename = "Id")]
    id: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Stage")]
    #[serde(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Home")]
    #[serde(rename = "Home")]
    home: String,
    #[tabled(rename = "Away")]
    #[serde(rename = "Away")]
    away: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
}

// -- Row builders --

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn number<N: ToString>(value: Option<N>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn build_competition_rows(competitions: &[Competition]) -> Vec<CompetitionRow> {
    competitions
        .iter()
        .map(|c| CompetitionRow {
            id: number(c.id()),
            code: text(c.code()),
            name: text(c.name()),
            area: c
                .area()
                .and_then(|a| a.name().map(str::to_string))
                .unwrap_or_default(),
            competition_type: text(c.competition_type()),
            seasons: number(c.number_of_available_seasons()),
        })
        .collect()
}

fn build_team_rows(teams: &[Team]) -> Vec<TeamRow> {
    teams
        .iter()
        .map(|t| TeamRow {
            id: number(t.id()),
            name: text(t.name()),
            short_name: text(t.short_name()),
            tla: text(t.tla()),
            founded: number(t.founded()),
            venue: text(t.venue()),
        })
        .collect()
}

fn goals(value: Option<u64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}

fn team_name(team: Option<Team>) -> String {
    team.and_then(|t| t.name().map(str::to_string))
        .unwrap_or_else(|| "?".to_string())
}

fn build_match_rows(matches: &[Match]) -> Vec<MatchRow> {
    matches
        .iter()
        .map(|m| MatchRow {
            id: number(m.id()),
            date: m
                .kickoff()
                .map(|k| k.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| text(m.utc_date())),
            status: text(m.status()),
            stage: text(m.stage()),
            home: team_name(m.home_team()),
            away: team_name(m.away_team()),
            score: m
                .score()
                .and_then(|s| s.full_time())
                .map(|line| format!("{} - {}", goals(line.home()), goals(line.away())))
                .unwrap_or_default(),
        })
        .collect()
}

// -- Table output --

fn print_table<R: Tabled>(rows: Vec<R>) {
    println!("{}", Table::new(rows));
}

// -- Markdown output --

fn print_markdown<R: Tabled>(rows: Vec<R>) {
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

fn print_csv<R: Serialize>(rows: Vec<R>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn print_rows<D, R>(data: &D, rows: Vec<R>, format: &OutputFormat) -> Result<()>
where
    D: Serialize + ?Sized,
    R: Tabled + Serialize,
{
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Markdown => print_markdown(rows),
        OutputFormat::Csv => print_csv(rows)?,
        OutputFormat::Json => print_json(data),
    }
    Ok(())
}

pub fn print_competitions(competitions: &[Competition], format: &OutputFormat) -> Result<()> {
    print_rows(competitions, build_competition_rows(competitions), format)
}

pub fn print_teams(teams: &[Team], format: &OutputFormat) -> Result<()> {
    print_rows(teams, build_team_rows(teams), format)
}

pub fn print_matches(matches: &[Match], format: &OutputFormat) -> Result<()> {
    print_rows(matches, build_match_rows(matches), format)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
