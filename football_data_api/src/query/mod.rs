mod common;
pub use self::common::{DateFiltered, DateRange, Query, Status, Venue};

mod competition;
pub use self::competition::{CompetitionMatchesQuery, CompetitionTeamsQuery};

mod matches;
pub use self::matches::MatchesQuery;

mod team;
pub use self::team::TeamMatchesQuery;
