mod envelope;
pub use self::envelope::StandingsEnvelope;

mod standings;
pub use self::standings::{Goals, LeagueInfo, LeagueStandings, Record, TeamRef, TeamStanding};
