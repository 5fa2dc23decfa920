//! Competition, area and season projections.

use std::fmt;

use super::Team;

projection!(
    /// A league or tournament, e.g. the Premier League or the FIFA World Cup.
    Competition
);

projection!(
    /// A country or continent that competitions and teams belong to.
    Area
);

projection!(
    /// One season of a competition.
    Season
);

impl Competition {
    pub fn id(&self) -> Option<u64> {
        self.u64_field("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Short code such as `PL` or `WC`.
    pub fn code(&self) -> Option<&str> {
        self.str_field("code")
    }

    /// `LEAGUE`, `CUP` or `PLAYOFFS`.
    pub fn competition_type(&self) -> Option<&str> {
        self.str_field("type")
    }

    /// Emblem URL. Older payloads name the field `emblemUrl`.
    pub fn emblem(&self) -> Option<&str> {
        self.str_field("emblem")
            .or_else(|| self.str_field("emblemUrl"))
    }

    pub fn plan(&self) -> Option<&str> {
        self.str_field("plan")
    }

    pub fn area(&self) -> Option<Area> {
        self.entity("area").map(Area::from)
    }

    pub fn current_season(&self) -> Option<Season> {
        self.entity("currentSeason").map(Season::from)
    }

    /// Past seasons; only present on the single competition resource.
    pub fn seasons(&self) -> Vec<Season> {
        self.entities("seasons").into_iter().map(Season::from).collect()
    }

    /// `numberOfAvailableSeasons`, or the length of `seasons` when only the
    /// list is present.
    pub fn number_of_available_seasons(&self) -> Option<u64> {
        self.u64_field("numberOfAvailableSeasons").or_else(|| {
            self.get("seasons")
                .and_then(|seasons| seasons.as_array())
                .map(|seasons| seasons.len() as u64)
        })
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.str_field("lastUpdated")
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seasons = self
            .number_of_available_seasons()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "None".to_string());
        write!(
            f,
            "{} - {} ({} seasons) updated: {}",
            self.id().map(|id| id.to_string()).unwrap_or_default(),
            self.name().unwrap_or_default(),
            seasons,
            self.last_updated().unwrap_or_default()
        )
    }
}

impl Area {
    pub fn id(&self) -> Option<u64> {
        self.u64_field("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn code(&self) -> Option<&str> {
        self.str_field("code")
    }

    pub fn flag(&self) -> Option<&str> {
        self.str_field("flag")
    }
}

impl Season {
    pub fn id(&self) -> Option<u64> {
        self.u64_field("id")
    }

    pub fn start_date(&self) -> Option<&str> {
        self.str_field("startDate")
    }

    pub fn end_date(&self) -> Option<&str> {
        self.str_field("endDate")
    }

    pub fn current_matchday(&self) -> Option<u64> {
        self.u64_field("currentMatchday")
    }

    /// Winning team, once the season is decided.
    pub fn winner(&self) -> Option<Team> {
        self.entity("winner").map(Team::from)
    }
}
