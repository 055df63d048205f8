use crate::model::structures::rating::Rating;

/// Caller-owned storage for team synergy ratings.
///
/// A synergy rating is an extra team-level belief which the engine folds into
/// the comparison as a pseudo-player. For every team of a game the engine calls
/// [`Synergy::read`] (then [`Synergy::init`] if nothing is stored) before the
/// update and [`Synergy::write`] once after it. Keying the storage by team
/// composition is left to the implementation.
pub trait Synergy {
    fn read(&self, team: &[Rating]) -> Option<Rating>;

    /// Creates a synergy rating for a team seen for the first time.
    /// Returning `None` leaves the team without synergy.
    fn init(&self, _team: &[Rating]) -> Option<Rating> {
        None
    }

    fn write(&self, team: &[Rating], synergy: Rating);
}
