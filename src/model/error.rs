use thiserror::Error;

/// Input-shape errors. These are raised before any computation takes place.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RateError {
    #[error("A game needs at least one team")]
    EmptyGame,

    #[error("Team {team} has no players")]
    EmptyTeam { team: usize },

    #[error("Expected {expected} {field} entries (one per team), found {found}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize
    },

    #[error("Weights for team {team} cover {found} players, expected {expected}")]
    WeightShape { team: usize, expected: usize, found: usize },

    #[error("Model returned {found} teams for a game of {expected}")]
    ModelOutput { expected: usize, found: usize },

    #[error("Model returned {found} players for team {team}, expected {expected}")]
    ModelTeamOutput { team: usize, expected: usize, found: usize },

    #[error("rate_2v2 requires exactly two players per team, team {team} has {players}")]
    TeamSize { team: usize, players: usize },

    #[error("rate_2v2 does not allow draws: {field} values must differ")]
    Draw { field: &'static str }
}
