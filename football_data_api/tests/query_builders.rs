use chrono::NaiveDate;
use football_data_api::{
    CompetitionMatchesQuery, CompetitionTeamsQuery, DateFiltered, MatchesQuery, Query, Status,
    TeamMatchesQuery, UrlBuilder, ValidationError, Venue,
};

fn url(path: &str, query: &impl Query) -> String {
    UrlBuilder::default().build(path, &query.to_params().unwrap())
}

#[test]
fn competition_teams_url() {
    let query = CompetitionTeamsQuery::default()
        .with_season(2018)
        .with_stage("FINAL");
    assert_eq!(
        url("competitions/CL/teams", &query),
        "https://api.football-data.org/v4/competitions/CL/teams/?season=2018&stage=FINAL"
    );
}

#[test]
fn competition_teams_without_filters() {
    assert_eq!(
        url("competitions/CL/teams", &CompetitionTeamsQuery::default()),
        "https://api.football-data.org/v4/competitions/CL/teams"
    );
}

#[test]
fn competition_matches_url_encodes_group() {
    let query = CompetitionMatchesQuery::default()
        .with_season(2019)
        .with_stage("PRELIMINARY_SEMI_FINALS")
        .with_group("Preliminary Semi-finals");
    assert_eq!(
        url("competitions/CL/matches", &query),
        "https://api.football-data.org/v4/competitions/CL/matches/?stage=PRELIMINARY_SEMI_FINALS&group=Preliminary+Semi-finals&season=2019"
    );
}

#[test]
fn competition_matches_matchday_and_status() {
    let query = CompetitionMatchesQuery::default()
        .with_matchday(1)
        .with_status("FINISHED");
    assert_eq!(
        url("competitions/2015/matches", &query),
        "https://api.football-data.org/v4/competitions/2015/matches/?status=FINISHED&matchday=1"
    );
}

#[test]
fn naive_dates_are_formatted() {
    let from = NaiveDate::from_ymd_opt(2018, 7, 8).unwrap();
    let to = NaiveDate::from_ymd_opt(2018, 7, 15).unwrap();
    let query = MatchesQuery::default().with_date_range(from, to);
    let params = query.to_params().unwrap();
    assert_eq!(params.get("dateFrom"), Some("2018-07-08"));
    assert_eq!(params.get("dateTo"), Some("2018-07-15"));
}

#[test]
fn matches_url_order() {
    let query = MatchesQuery::default()
        .with_status(Status::Scheduled)
        .with_date_range("2024-01-01", "2024-01-07")
        .with_competition("PL");
    assert_eq!(
        url("matches", &query),
        "https://api.football-data.org/v4/matches/?competitions=PL&dateFrom=2024-01-01&dateTo=2024-01-07&status=SCHEDULED"
    );
}

#[test]
fn team_matches_url_order() {
    let query = TeamMatchesQuery::default()
        .with_season(2020)
        .with_limit(5)
        .with_venue(Venue::Away)
        .with_status(Status::Finished)
        .with_date_range("2020-09-01", "2021-05-31");
    assert_eq!(
        url("teams/450/matches", &query),
        "https://api.football-data.org/v4/teams/450/matches/?dateFrom=2020-09-01&dateTo=2021-05-31&status=FINISHED&venue=AWAY&limit=5&season=2020"
    );
}

#[test]
fn every_date_query_rejects_half_ranges() {
    let one_sided = [
        CompetitionMatchesQuery::default()
            .with_date_from("2018-07-08")
            .to_params(),
        MatchesQuery::default().with_date_to("2018-07-08").to_params(),
        TeamMatchesQuery::default()
            .with_date_from("2018-07-08")
            .to_params(),
    ];
    for result in one_sided {
        assert_eq!(result.unwrap_err(), ValidationError::IncompleteDateRange);
    }
}

#[test]
fn season_rejected_everywhere() {
    assert!(CompetitionTeamsQuery::default()
        .with_season("20")
        .to_params()
        .is_err());
    assert!(CompetitionMatchesQuery::default()
        .with_season("twenty")
        .to_params()
        .is_err());
    assert!(TeamMatchesQuery::default()
        .with_season("2020/21")
        .to_params()
        .is_err());
}

#[test]
fn venue_lowercase_normalized() {
    let params = TeamMatchesQuery::default()
        .with_venue("home")
        .to_params()
        .unwrap();
    assert_eq!(params.get("venue"), Some("HOME"));
}
