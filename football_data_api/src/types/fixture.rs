//! Match and score projections.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{Competition, Entity, Season, Team};

projection!(
    /// A single fixture between two teams.
    Match
);

projection!(
    /// Result of a match: winner, duration and per-period score lines.
    Score
);

projection!(
    /// Goals for each side in one period.
    ScoreLine
);

impl Match {
    pub fn id(&self) -> Option<u64> {
        self.u64_field("id")
    }

    /// Kick-off as sent by the API, e.g. `2018-07-15T15:00:00Z`.
    pub fn utc_date(&self) -> Option<&str> {
        self.str_field("utcDate")
    }

    /// Kick-off parsed as RFC 3339. `None` if absent or malformed.
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        self.utc_date()
            .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
            .map(|date| date.with_timezone(&Utc))
    }

    pub fn status(&self) -> Option<&str> {
        self.str_field("status")
    }

    pub fn matchday(&self) -> Option<u64> {
        self.u64_field("matchday")
    }

    pub fn stage(&self) -> Option<&str> {
        self.str_field("stage")
    }

    pub fn group(&self) -> Option<&str> {
        self.str_field("group")
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.str_field("lastUpdated")
    }

    /// Stadium name.
    pub fn venue(&self) -> Option<&str> {
        self.str_field("venue")
    }

    pub fn competition(&self) -> Option<Competition> {
        self.entity("competition").map(Competition::from)
    }

    pub fn season(&self) -> Option<Season> {
        self.entity("season").map(Season::from)
    }

    pub fn home_team(&self) -> Option<Team> {
        self.entity("homeTeam").map(Team::from)
    }

    pub fn away_team(&self) -> Option<Team> {
        self.entity("awayTeam").map(Team::from)
    }

    pub fn score(&self) -> Option<Score> {
        self.entity("score").map(Score::from)
    }

    pub fn referees(&self) -> Vec<Entity> {
        self.entities("referees")
    }

    pub fn odds(&self) -> Option<Entity> {
        self.entity("odds")
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let team_name = |team: Option<Team>| {
            team.and_then(|t| t.name().map(str::to_string))
                .unwrap_or_else(|| "?".to_string())
        };
        let full_time = self.score().and_then(|s| s.full_time());
        let goals = |side: Option<u64>| side.map(|g| g.to_string()).unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{} - {}  {} - {}",
            team_name(self.home_team()),
            team_name(self.away_team()),
            goals(full_time.as_ref().and_then(ScoreLine::home)),
            goals(full_time.as_ref().and_then(ScoreLine::away)),
        )
    }
}

impl Score {
    /// `HOME_TEAM`, `AWAY_TEAM`, `DRAW`, or `None` while undecided.
    pub fn winner(&self) -> Option<&str> {
        self.str_field("winner")
    }

    /// `REGULAR`, `EXTRA_TIME` or `PENALTY_SHOOTOUT`.
    pub fn duration(&self) -> Option<&str> {
        self.str_field("duration")
    }

    pub fn full_time(&self) -> Option<ScoreLine> {
        self.entity("fullTime").map(ScoreLine::from)
    }

    pub fn half_time(&self) -> Option<ScoreLine> {
        self.entity("halfTime").map(ScoreLine::from)
    }
}

impl ScoreLine {
    /// Home goals. Older payloads use `homeTeam` as the key.
    pub fn home(&self) -> Option<u64> {
        self.u64_field("home")
            .or_else(|| self.u64_field("homeTeam"))
    }

    /// Away goals. Older payloads use `awayTeam` as the key.
    pub fn away(&self) -> Option<u64> {
        self.u64_field("away")
            .or_else(|| self.u64_field("awayTeam"))
    }
}
