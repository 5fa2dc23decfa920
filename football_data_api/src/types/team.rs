//! Team projection.

use std::fmt;

use super::{Area, Competition, Entity};

projection!(
    /// A club or national team.
    Team
);

impl Team {
    pub fn id(&self) -> Option<u64> {
        self.u64_field("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn short_name(&self) -> Option<&str> {
        self.str_field("shortName")
    }

    /// Three-letter abbreviation.
    pub fn tla(&self) -> Option<&str> {
        self.str_field("tla")
    }

    pub fn crest(&self) -> Option<&str> {
        self.str_field("crest")
            .or_else(|| self.str_field("crestUrl"))
    }

    pub fn address(&self) -> Option<&str> {
        self.str_field("address")
    }

    pub fn website(&self) -> Option<&str> {
        self.str_field("website")
    }

    pub fn founded(&self) -> Option<i64> {
        self.i64_field("founded")
    }

    pub fn club_colors(&self) -> Option<&str> {
        self.str_field("clubColors")
    }

    /// Home ground.
    pub fn venue(&self) -> Option<&str> {
        self.str_field("venue")
    }

    pub fn area(&self) -> Option<Area> {
        self.entity("area").map(Area::from)
    }

    pub fn running_competitions(&self) -> Vec<Competition> {
        self.entities("runningCompetitions")
            .into_iter()
            .map(Competition::from)
            .collect()
    }

    pub fn coach(&self) -> Option<Entity> {
        self.entity("coach")
    }

    /// Players, as listed on the single team resource.
    pub fn squad(&self) -> Vec<Entity> {
        self.entities("squad")
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or_default())
    }
}
