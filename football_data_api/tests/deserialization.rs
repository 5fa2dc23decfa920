use football_data_api::mapper::{map, Shape};
use football_data_api::types::{Competition, Match, Team};

fn load_fixture(name: &str) -> serde_json::Value {
    let raw = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn competitions_list() {
    let competitions: Vec<Competition> =
        map(Shape::List("competitions"), load_fixture("competitions.json")).into_list();
    assert_eq!(competitions.len(), 2);

    let pl = &competitions[1];
    assert_eq!(pl.code(), Some("PL"));
    assert_eq!(pl.competition_type(), Some("LEAGUE"));
    assert_eq!(pl.plan(), Some("TIER_ONE"));
    assert_eq!(pl.emblem(), Some("https://crests.football-data.org/PL.png"));
    assert_eq!(pl.current_season().unwrap().current_matchday(), Some(10));
    assert_eq!(
        pl.to_string(),
        "2021 - Premier League (31 seasons) updated: 2022-03-20T08:58:54Z"
    );
}

#[test]
fn competition_seasons_and_winners() {
    let comp: Competition = map(Shape::Single, load_fixture("competition.json"))
        .into_single()
        .unwrap();
    let seasons = comp.seasons();
    assert_eq!(seasons.len(), 3);
    assert!(seasons[0].winner().is_none());
    assert_eq!(
        seasons[1].winner().unwrap().short_name(),
        Some("Man City")
    );
    assert_eq!(seasons[2].start_date(), Some("2021-06-22"));
    // No numberOfAvailableSeasons on this resource: falls back to the list.
    assert_eq!(comp.number_of_available_seasons(), Some(3));
}

#[test]
fn competition_display_without_season_info() {
    let comp: Competition = map(
        Shape::Single,
        serde_json::json!({"id": 1, "name": "Cup", "lastUpdated": "x"}),
    )
    .into_single()
    .unwrap();
    assert_eq!(comp.to_string(), "1 - Cup (None seasons) updated: x");
}

#[test]
fn match_projection() {
    let fixture: Match = map(Shape::Single, load_fixture("match.json"))
        .into_single()
        .unwrap();
    assert_eq!(fixture.id(), Some(266391));
    assert_eq!(fixture.status(), Some("FINISHED"));
    assert_eq!(fixture.group(), Some("Preliminary Semi-finals"));
    assert_eq!(fixture.matchday(), None);
    assert_eq!(fixture.competition().unwrap().code(), Some("CL"));
    assert_eq!(fixture.season().unwrap().id(), Some(495));
    assert_eq!(fixture.home_team().unwrap().tla(), Some("PRI"));
    assert_eq!(fixture.referees().len(), 1);
    assert!(fixture.odds().unwrap().contains("msg"));

    let score = fixture.score().unwrap();
    assert_eq!(score.duration(), Some("REGULAR"));
    assert_eq!(score.half_time().unwrap().home(), Some(0));
    assert_eq!(fixture.to_string(), "FC Prishtina - FK Crvena Zvezda  0 - 1");

    let kickoff = fixture.kickoff().unwrap();
    assert_eq!(kickoff.to_rfc3339(), "2019-06-25T16:00:00+00:00");
}

#[test]
fn match_unknown_fields_are_kept() {
    let fixture: Match = map(Shape::Single, load_fixture("match.json"))
        .into_single()
        .unwrap();
    assert_eq!(fixture["area"]["name"], "Europe");
    assert_eq!(serde_json::to_value(&fixture).unwrap(), load_fixture("match.json"));
}

#[test]
fn legacy_score_keys() {
    let fixture: Match = map(
        Shape::Single,
        serde_json::json!({
            "homeTeam": {"name": "A"},
            "awayTeam": {"name": "B"},
            "score": {"fullTime": {"homeTeam": 2, "awayTeam": 3}}
        }),
    )
    .into_single()
    .unwrap();
    assert_eq!(fixture.to_string(), "A - B  2 - 3");
}

#[test]
fn unplayed_match_display() {
    let fixture: Match = map(
        Shape::Single,
        serde_json::json!({"homeTeam": {"name": "A"}, "awayTeam": {}, "score": {"fullTime": {"home": null, "away": null}}}),
    )
    .into_single()
    .unwrap();
    assert_eq!(fixture.to_string(), "A - ?  - - -");
}

#[test]
fn team_projection() {
    let team: Team = map(Shape::Single, load_fixture("team.json"))
        .into_single()
        .unwrap();
    assert_eq!(team.short_name(), Some("Verona"));
    assert_eq!(team.club_colors(), Some("Yellow / Blue"));
    assert_eq!(team.area().unwrap().code(), Some("ITA"));
    assert_eq!(team.running_competitions()[0].code(), Some("SA"));
    assert_eq!(team.coach().unwrap().str_field("lastName"), Some("Baroni"));
    assert_eq!(team.squad().len(), 2);
    assert_eq!(team.to_string(), "Hellas Verona FC");
    assert!(team.entities("staff").is_empty());
}

#[test]
fn teams_list_keeps_order() {
    let teams: Vec<Team> = map(Shape::List("teams"), load_fixture("teams.json")).into_list();
    let ids: Vec<_> = teams.iter().filter_map(|t| t.id()).collect();
    assert_eq!(ids, vec![64, 73]);
}
